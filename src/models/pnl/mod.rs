//! Profit-and-loss curves across hypothetical underlying prices.
//!
//! The default curve is the expiry payoff of a long call and a long put minus
//! the premium paid to enter each position. A mark-to-market variant, which
//! reprices the options at every swept spot with the remaining inputs held
//! fixed, is available through [`PnlMethod::MarkToMarket`].

use crate::error::{PricingError, PricingResult};
use crate::evaluation::types::{PnlPoint, PnlSeries, PriceResult, PricingInputs};
use crate::models::bs::{price_from_terms, BlackScholesTerms};
use crate::models::utils::{intrinsic_call, intrinsic_put};

/// How each point of the PnL curve values the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PnlMethod {
    /// Payoff at expiry, `max(s - X, 0)` / `max(X - s, 0)`, minus premium
    #[default]
    ExpiryPayoff,
    /// Black-Scholes value at spot `s` with r, σ and T unchanged, minus premium
    MarkToMarket,
}

/// Premiums paid to enter the call and the put.
///
/// `None` means "pay the model price": the premium is the Black-Scholes value
/// at the original inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryPremiums {
    pub call: Option<f64>,
    pub put: Option<f64>,
}

impl EntryPremiums {
    /// Both legs entered at the model price.
    pub fn model() -> Self {
        Self::default()
    }

    /// Both legs entered at explicit premiums.
    pub fn fixed(call: f64, put: f64) -> Self {
        Self {
            call: Some(call),
            put: Some(put),
        }
    }

    /// Fill missing premiums from `model` and check the result is finite.
    pub fn resolve(&self, model: &PriceResult) -> PricingResult<(f64, f64)> {
        let call = self.call.unwrap_or(model.call);
        let put = self.put.unwrap_or(model.put);

        if !call.is_finite() {
            return Err(PricingError::invalid(
                "entry_premium_call",
                call,
                "must be finite",
            ));
        }
        if !put.is_finite() {
            return Err(PricingError::invalid(
                "entry_premium_put",
                put,
                "must be finite",
            ));
        }
        Ok((call, put))
    }
}

/// Evenly spaced grid of spot prices, both bounds included.
///
/// Deserialization goes through [`SpotSweep::new`], so a decoded sweep upholds
/// the same bounds as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotSweep {
    lower: f64,
    upper: f64,
    points: usize,
}

impl SpotSweep {
    /// # Errors
    ///
    /// [`PricingError::InvalidInput`] unless `0 <= lower < upper`, both are
    /// finite, `points >= 2` and the bounds are far enough apart for every
    /// grid point to be distinct.
    pub fn new(lower: f64, upper: f64, points: usize) -> PricingResult<Self> {
        if !lower.is_finite() || lower < 0.0 {
            return Err(PricingError::invalid(
                "sweep_lower",
                lower,
                "must be finite and non-negative",
            ));
        }
        if !upper.is_finite() || upper <= lower {
            return Err(PricingError::invalid(
                "sweep_upper",
                upper,
                "must be finite and above the lower bound",
            ));
        }
        if points < 2 {
            return Err(PricingError::invalid(
                "sweep_points",
                points as f64,
                "at least two points are required",
            ));
        }

        let sweep = Self {
            lower,
            upper,
            points,
        };
        // Bounds a few ulps apart round neighbouring grid points together
        if (1..points).any(|i| sweep.spot_at(i) <= sweep.spot_at(i - 1)) {
            return Err(PricingError::invalid(
                "sweep_upper",
                upper,
                "too close to the lower bound to separate the grid points",
            ));
        }
        Ok(sweep)
    }

    /// Grid from `lower_multiple * spot` to `upper_multiple * spot`.
    ///
    /// ```rust
    /// use greeks_lib::SpotSweep;
    ///
    /// // The dashboard grid: 50% to 150% of spot in 100 steps
    /// let sweep = SpotSweep::around(100.0, 0.5, 1.5, 100)?;
    /// let spots = sweep.spots();
    /// assert_eq!(spots.len(), 100);
    /// assert_eq!(spots[0], 50.0);
    /// assert_eq!(spots[99], 150.0);
    /// # Ok::<(), greeks_lib::PricingError>(())
    /// ```
    pub fn around(
        spot: f64,
        lower_multiple: f64,
        upper_multiple: f64,
        points: usize,
    ) -> PricingResult<Self> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::invalid("spot", spot, "must be positive"));
        }
        Self::new(spot * lower_multiple, spot * upper_multiple, points)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn points(&self) -> usize {
        self.points
    }

    /// Materialize the grid.
    pub fn spots(&self) -> Vec<f64> {
        (0..self.points).map(|i| self.spot_at(i)).collect()
    }

    fn spot_at(&self, i: usize) -> f64 {
        let last = self.points - 1;
        if i == last {
            self.upper
        } else {
            self.lower + (self.upper - self.lower) / last as f64 * i as f64
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SpotSweep {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            lower: f64,
            upper: f64,
            points: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.lower, raw.upper, raw.points).map_err(serde::de::Error::custom)
    }
}

/// Expiry-payoff PnL of a long call and a long put over `spots`.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] when `inputs` are invalid, when `spots` is
/// empty, not strictly increasing or contains negative or non-finite values,
/// or when an explicit premium is non-finite.
///
/// # Example
///
/// ```rust
/// use greeks_lib::{pnl_curve, EntryPremiums, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
/// let spots = [80.0, 90.0, 100.0, 110.0, 120.0];
/// let series = pnl_curve(&inputs, &spots, EntryPremiums::fixed(10.45, 5.57))?;
///
/// let last = series.points()[4];
/// assert!((last.call_pnl - 9.55).abs() < 1e-9);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn pnl_curve(
    inputs: &PricingInputs,
    spots: &[f64],
    premiums: EntryPremiums,
) -> PricingResult<PnlSeries> {
    pnl_curve_with_method(inputs, spots, premiums, PnlMethod::ExpiryPayoff)
}

/// PnL curve using the given valuation `method`.
pub fn pnl_curve_with_method(
    inputs: &PricingInputs,
    spots: &[f64],
    premiums: EntryPremiums,
    method: PnlMethod,
) -> PricingResult<PnlSeries> {
    let terms = BlackScholesTerms::new(inputs)?;
    let model = price_from_terms(&terms);
    pnl_curve_from_terms(&terms, &model, spots, premiums, method)
}

/// PnL curve from terms and prices that were already computed for `inputs`.
pub(crate) fn pnl_curve_from_terms(
    terms: &BlackScholesTerms,
    model: &PriceResult,
    spots: &[f64],
    premiums: EntryPremiums,
    method: PnlMethod,
) -> PricingResult<PnlSeries> {
    validate_spots(spots, method)?;
    let (premium_call, premium_put) = premiums.resolve(model)?;
    let inputs = terms.inputs();

    let points = match method {
        PnlMethod::ExpiryPayoff => spots
            .iter()
            .map(|&s| PnlPoint {
                spot: s,
                call_pnl: intrinsic_call(s, inputs.strike) - premium_call,
                put_pnl: intrinsic_put(s, inputs.strike) - premium_put,
            })
            .collect(),
        PnlMethod::MarkToMarket => spots
            .iter()
            .map(|&s| {
                let marked = price_from_terms(&BlackScholesTerms::new(&inputs.with_spot(s))?);
                Ok(PnlPoint {
                    spot: s,
                    call_pnl: marked.call - premium_call,
                    put_pnl: marked.put - premium_put,
                })
            })
            .collect::<PricingResult<Vec<_>>>()?,
    };

    Ok(PnlSeries::from_sorted(points))
}

pub(crate) fn validate_spots(spots: &[f64], method: PnlMethod) -> PricingResult<()> {
    let first = match spots.first() {
        Some(&first) => first,
        None => {
            return Err(PricingError::invalid(
                "spots",
                0.0,
                "at least one spot is required",
            ))
        }
    };

    if let Some(&bad) = spots.iter().find(|s| !s.is_finite() || **s < 0.0) {
        return Err(PricingError::invalid(
            "spots",
            bad,
            "must be finite and non-negative",
        ));
    }
    if let Some(pair) = spots.windows(2).find(|w| w[1] <= w[0]) {
        return Err(PricingError::invalid(
            "spots",
            pair[1],
            "must be strictly increasing",
        ));
    }
    // Sorted, so the first spot is the smallest
    if method == PnlMethod::MarkToMarket && first <= 0.0 {
        return Err(PricingError::invalid(
            "spots",
            first,
            "must be positive for mark-to-market",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::price;

    fn inputs() -> PricingInputs {
        PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0)
    }

    #[test]
    fn test_expiry_payoff_with_explicit_premiums() {
        let spots = [80.0, 90.0, 100.0, 110.0, 120.0];
        let series = pnl_curve(&inputs(), &spots, EntryPremiums::fixed(10.45, 5.57)).unwrap();

        assert_eq!(series.spots(), spots.to_vec());
        let call: Vec<f64> = series.call_pnl();
        let put: Vec<f64> = series.put_pnl();

        assert!((call[0] + 10.45).abs() < 1e-12);
        assert!((call[4] - 9.55).abs() < 1e-12);
        assert!((put[0] - (20.0 - 5.57)).abs() < 1e-12);
        assert!((put[4] + 5.57).abs() < 1e-12);
    }

    #[test]
    fn test_default_premiums_are_model_prices() {
        let model = price(&inputs()).unwrap();
        let series = pnl_curve(&inputs(), &[100.0], EntryPremiums::model()).unwrap();
        let at_strike = series.points()[0];

        assert!((at_strike.call_pnl + model.call).abs() < 1e-12);
        assert!((at_strike.put_pnl + model.put).abs() < 1e-12);
    }

    #[test]
    fn test_partial_override_keeps_model_price_for_other_leg() {
        let model = price(&inputs()).unwrap();
        let premiums = EntryPremiums {
            call: Some(1.0),
            put: None,
        };
        let series = pnl_curve(&inputs(), &[100.0], premiums).unwrap();
        assert!((series.points()[0].call_pnl + 1.0).abs() < 1e-12);
        assert!((series.points()[0].put_pnl + model.put).abs() < 1e-12);
    }

    #[test]
    fn test_mark_to_market_at_entry_spot_is_zero() {
        let spots = [90.0, 100.0, 110.0];
        let series = pnl_curve_with_method(
            &inputs(),
            &spots,
            EntryPremiums::model(),
            PnlMethod::MarkToMarket,
        )
        .unwrap();

        let at_entry = series.points()[1];
        assert!(at_entry.call_pnl.abs() < 1e-12);
        assert!(at_entry.put_pnl.abs() < 1e-12);
        // Before expiry the option is worth more than its payoff
        assert!(series.points()[0].call_pnl > -price(&inputs()).unwrap().call);
    }

    #[test]
    fn test_invalid_spot_ranges() {
        let premiums = EntryPremiums::model();
        let err = pnl_curve(&inputs(), &[], premiums).unwrap_err();
        assert_eq!(err.field(), "spots");

        let err = pnl_curve(&inputs(), &[100.0, 90.0], premiums).unwrap_err();
        assert_eq!(err.field(), "spots");

        let err = pnl_curve(&inputs(), &[100.0, 100.0], premiums).unwrap_err();
        assert_eq!(err.field(), "spots");

        let err = pnl_curve(&inputs(), &[-1.0, 100.0], premiums).unwrap_err();
        assert_eq!(err.field(), "spots");

        let err = pnl_curve(&inputs(), &[90.0, f64::NAN], premiums).unwrap_err();
        assert_eq!(err.field(), "spots");

        // Zero spot is a valid expiry scenario but cannot be repriced
        assert!(pnl_curve(&inputs(), &[0.0, 100.0], premiums).is_ok());
        let err = pnl_curve_with_method(
            &inputs(),
            &[0.0, 100.0],
            premiums,
            PnlMethod::MarkToMarket,
        )
        .unwrap_err();
        assert_eq!(err.field(), "spots");
    }

    #[test]
    fn test_invalid_inputs_and_premiums() {
        let bad = inputs().with_spot(0.0);
        assert!(pnl_curve(&bad, &[100.0], EntryPremiums::model()).is_err());

        let err = pnl_curve(&inputs(), &[100.0], EntryPremiums::fixed(f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err.field(), "entry_premium_call");
    }

    #[test]
    fn test_sweep_grid() {
        let sweep = SpotSweep::new(50.0, 150.0, 5).unwrap();
        assert_eq!(sweep.spots(), vec![50.0, 75.0, 100.0, 125.0, 150.0]);

        let around = SpotSweep::around(200.0, 0.5, 1.5, 3).unwrap();
        assert_eq!(around.lower(), 100.0);
        assert_eq!(around.upper(), 300.0);
        assert_eq!(around.points(), 3);
    }

    #[test]
    fn test_sweep_rejects_bad_bounds() {
        assert_eq!(
            SpotSweep::new(-1.0, 10.0, 5).unwrap_err().field(),
            "sweep_lower"
        );
        assert_eq!(
            SpotSweep::new(10.0, 10.0, 5).unwrap_err().field(),
            "sweep_upper"
        );
        assert_eq!(
            SpotSweep::new(1.0, 10.0, 1).unwrap_err().field(),
            "sweep_points"
        );
        assert_eq!(
            SpotSweep::around(0.0, 0.5, 1.5, 10).unwrap_err().field(),
            "spot"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_sweep_deserialization_is_validated() {
        let sweep: SpotSweep = toml::from_str("lower = 50.0\nupper = 150.0\npoints = 5").unwrap();
        assert_eq!(sweep, SpotSweep::new(50.0, 150.0, 5).unwrap());

        let err = toml::from_str::<SpotSweep>("lower = 150.0\nupper = 50.0\npoints = 5")
            .unwrap_err();
        assert!(err.to_string().contains("sweep_upper"), "{}", err);

        let err =
            toml::from_str::<SpotSweep>("lower = 50.0\nupper = 150.0\npoints = 0").unwrap_err();
        assert!(err.to_string().contains("sweep_points"), "{}", err);
    }

    #[test]
    fn test_sweep_rejects_bounds_too_close_to_separate() {
        let err = SpotSweep::new(1.0, 1.0 + 1e-15, 100).unwrap_err();
        assert_eq!(err.field(), "sweep_upper");

        // Two points only need distinct bounds
        let pair = SpotSweep::new(1.0, 1.0 + 1e-15, 2).unwrap();
        assert_eq!(pair.spots(), vec![1.0, 1.0 + 1e-15]);

        let sweep = SpotSweep::new(0.0, 1e-300, 1_000).unwrap();
        assert!(sweep.spots().windows(2).all(|w| w[0] < w[1]));
    }
}
