//! Standard normal density and cumulative distribution.
//!
//! Φ is evaluated through the complementary error function from `libm`,
//! which is accurate to full double precision. Writing Φ(x) as
//! `erfc(-x/√2)/2` rather than `(1 + erf(x/√2))/2` keeps relative accuracy in
//! the lower tail, where `1 + erf` cancels catastrophically.

use std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density φ(x) = e^(-x²/2) / √(2π).
///
/// Peaks at `1/√(2π)` for `x = 0` and underflows to 0 for very large |x|.
#[inline]
pub fn density(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution Φ(x) = P(Z <= x).
///
/// Returns a value in [0, 1], non-decreasing in `x`, with Φ(0) = 0.5 and
/// Φ(-x) = 1 - Φ(x).
///
/// # Example
///
/// ```rust
/// use greeks_lib::models::normal::cumulative;
///
/// assert_eq!(cumulative(0.0), 0.5);
/// assert!((cumulative(1.96) - 0.975).abs() < 1e-4);
/// ```
#[inline]
pub fn cumulative(x: f64) -> f64 {
    (0.5 * libm::erfc(-x * FRAC_1_SQRT_2)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_peak_and_symmetry() {
        assert!((density(0.0) - FRAC_1_SQRT_2PI).abs() < 1e-16);
        for &x in &[0.1, 0.5, 1.0, 2.5, 7.0] {
            assert_eq!(density(x), density(-x));
            assert!(density(x) < density(0.0));
            assert!(density(x) > 0.0);
        }
        assert_eq!(density(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_cumulative_known_values() {
        // Quantiles from standard normal tables
        let table = [
            (0.0, 0.5),
            (1.0, 0.841_344_746_068_543),
            (-1.0, 0.158_655_253_931_457),
            (1.959_963_984_540_054, 0.975),
            (-2.326_347_874_040_841, 0.01),
            (3.0, 0.998_650_101_968_370),
        ];
        for (x, expected) in table {
            let got = cumulative(x);
            assert!(
                (got - expected).abs() < 1e-12,
                "Φ({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_cumulative_limits() {
        assert_eq!(cumulative(f64::NEG_INFINITY), 0.0);
        assert_eq!(cumulative(f64::INFINITY), 1.0);
        assert!(cumulative(-40.0) >= 0.0);
        assert!(cumulative(40.0) <= 1.0);
        // Lower tail keeps relative precision
        assert!(cumulative(-10.0) > 0.0);
    }
}
