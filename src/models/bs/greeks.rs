//! Analytic Black-Scholes Greeks.
//!
//! All sensitivities are computed from the same [`BlackScholesTerms`] used for
//! pricing. Gamma and vega are shared by call and put and computed once.
//!
//! Theta is reported as calendar decay per year (the negative of ∂V/∂T), rho
//! per unit change in the rate and vega per unit change in volatility; see
//! [`GreeksResult::vega_per_point`] for the per-1% figure.

use super::{BlackScholesTerms, Regime};
use crate::error::PricingResult;
use crate::evaluation::types::{GreeksResult, PricingInputs};

/// Compute Delta, Gamma, Vega, Theta and Rho for the call and the put.
///
/// In the degenerate regime (`σ = 0` or `T = 0`) gamma and vega are zero and
/// delta, theta and rho are the sensitivities of the discounted intrinsic
/// value, using a weight of 1 in the money, 0 out of the money and 0.5 exactly
/// at the discounted strike.
///
/// # Errors
///
/// [`crate::PricingError::InvalidInput`] under the same conditions as
/// [`super::price`].
///
/// # Example
///
/// ```rust
/// use greeks_lib::{models::bs::greeks, PricingInputs};
///
/// let g = greeks(&PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0))?;
/// assert!((g.call_delta - 0.6368).abs() < 1e-4);
/// assert!((g.gamma - 0.0188).abs() < 1e-4);
/// assert!((g.vega - 37.52).abs() < 1e-2);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn greeks(inputs: &PricingInputs) -> PricingResult<GreeksResult> {
    let terms = BlackScholesTerms::new(inputs)?;
    Ok(greeks_from_terms(&terms))
}

/// Greeks from precomputed terms.
pub fn greeks_from_terms(terms: &BlackScholesTerms) -> GreeksResult {
    let PricingInputs {
        spot: s,
        rate: r,
        volatility: sigma,
        maturity: t,
        ..
    } = terms.inputs;

    let k_disc = terms.discounted_strike();
    let sqrt_t = terms.sqrt_t();
    let p = terms.probabilities();
    let pdf_d1 = terms.density_d1();

    let (gamma, vega, decay) = match terms.regime {
        Regime::Diffusive { .. } => (
            pdf_d1 / (s * sigma * sqrt_t),
            s * pdf_d1 * sqrt_t,
            // Time decay of the diffusion part, common to both legs
            -(s * pdf_d1 * sigma) / (2.0 * sqrt_t),
        ),
        Regime::Degenerate { .. } => (0.0, 0.0, 0.0),
    };

    GreeksResult {
        call_delta: p.nd1,
        put_delta: p.nd1 - 1.0,
        gamma,
        vega,
        call_theta: decay - r * k_disc * p.nd2,
        put_theta: decay + r * k_disc * p.n_minus_d2,
        call_rho: t * k_disc * p.nd2,
        put_rho: -t * k_disc * p.n_minus_d2,
    }
}
