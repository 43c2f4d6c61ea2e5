// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. The intermediate terms (d1, d2, discount
// factor) are computed once in `BlackScholesTerms` and shared with the Greeks
// so the two can never drift apart.

pub mod greeks;

use crate::error::PricingResult;
use crate::evaluation::types::{PriceResult, PricingInputs};
use crate::models::normal::{cumulative, density};
use crate::models::utils::{degenerate_itm_weight, intrinsic_call, intrinsic_put};

pub use greeks::{greeks, greeks_from_terms};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Regime {
    /// σ√T > 0: the usual lognormal formulas apply.
    Diffusive { d1: f64, d2: f64 },
    /// σ = 0 or T = 0: the option is worth its discounted intrinsic value.
    /// `itm_weight` stands in for Φ(d1) = Φ(d2) at the limit.
    Degenerate { itm_weight: f64 },
}

/// Validated inputs together with the terms every closed-form quantity needs.
///
/// # Example
///
/// ```rust
/// use greeks_lib::models::bs::BlackScholesTerms;
/// use greeks_lib::PricingInputs;
///
/// let terms = BlackScholesTerms::new(&PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0))?;
/// let (d1, d2) = terms.d1_d2().expect("diffusive regime");
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesTerms {
    inputs: PricingInputs,
    discount: f64,
    sqrt_t: f64,
    regime: Regime,
}

/// The four normal probabilities used by the price and Greek formulas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Probabilities {
    /// Φ(d1)
    pub nd1: f64,
    /// Φ(d2)
    pub nd2: f64,
    /// Φ(-d1)
    pub n_minus_d1: f64,
    /// Φ(-d2)
    pub n_minus_d2: f64,
}

impl BlackScholesTerms {
    /// Validate `inputs` and compute d1, d2 and the discount factor.
    ///
    /// # Errors
    ///
    /// [`crate::PricingError::InvalidInput`] if the inputs fail
    /// [`PricingInputs::validate`].
    pub fn new(inputs: &PricingInputs) -> PricingResult<Self> {
        inputs.validate()?;

        let discount = inputs.discount_factor();
        let sqrt_t = inputs.maturity.sqrt();
        let vol_sqrt_t = inputs.volatility * sqrt_t;

        // vol_sqrt_t also underflows to zero for tiny but positive σ and T
        let regime = if inputs.is_degenerate() || vol_sqrt_t == 0.0 {
            Regime::Degenerate {
                itm_weight: degenerate_itm_weight(inputs.spot, inputs.strike * discount),
            }
        } else {
            // No σ² term: an overflowing σ√T yields d1 = +∞, d2 = -∞
            let log_moneyness =
                ((inputs.spot / inputs.strike).ln() + inputs.rate * inputs.maturity) / vol_sqrt_t;
            Regime::Diffusive {
                d1: log_moneyness + 0.5 * vol_sqrt_t,
                d2: log_moneyness - 0.5 * vol_sqrt_t,
            }
        };

        Ok(Self {
            inputs: *inputs,
            discount,
            sqrt_t,
            regime,
        })
    }

    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    /// `(d1, d2)`, or `None` in the degenerate regime where they are undefined.
    pub fn d1_d2(&self) -> Option<(f64, f64)> {
        match self.regime {
            Regime::Diffusive { d1, d2 } => Some((d1, d2)),
            Regime::Degenerate { .. } => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self.regime, Regime::Degenerate { .. })
    }

    /// `e^(-rT)`
    pub fn discount_factor(&self) -> f64 {
        self.discount
    }

    /// `X·e^(-rT)`
    pub fn discounted_strike(&self) -> f64 {
        self.inputs.strike * self.discount
    }

    pub(crate) fn sqrt_t(&self) -> f64 {
        self.sqrt_t
    }

    /// φ(d1); zero at the degenerate limit.
    pub(crate) fn density_d1(&self) -> f64 {
        match self.regime {
            Regime::Diffusive { d1, .. } => density(d1),
            Regime::Degenerate { .. } => 0.0,
        }
    }

    pub(crate) fn probabilities(&self) -> Probabilities {
        match self.regime {
            Regime::Diffusive { d1, d2 } => Probabilities {
                nd1: cumulative(d1),
                nd2: cumulative(d2),
                n_minus_d1: cumulative(-d1),
                n_minus_d2: cumulative(-d2),
            },
            Regime::Degenerate { itm_weight } => Probabilities {
                nd1: itm_weight,
                nd2: itm_weight,
                n_minus_d1: 1.0 - itm_weight,
                n_minus_d2: 1.0 - itm_weight,
            },
        }
    }
}

/// Price the call and the put for `inputs`.
///
/// # Errors
///
/// [`crate::PricingError::InvalidInput`] for `spot <= 0`, `strike <= 0`,
/// `volatility < 0`, `maturity < 0` or any non-finite field.
///
/// # Example
///
/// ```rust
/// use greeks_lib::{models::bs::price, PricingInputs};
///
/// let prices = price(&PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0))?;
/// assert!((prices.call - 10.4506).abs() < 1e-3);
/// assert!((prices.put - 5.5735).abs() < 1e-3);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn price(inputs: &PricingInputs) -> PricingResult<PriceResult> {
    let terms = BlackScholesTerms::new(inputs)?;
    Ok(price_from_terms(&terms))
}

/// Price from precomputed terms.
pub fn price_from_terms(terms: &BlackScholesTerms) -> PriceResult {
    let s = terms.inputs.spot;
    let k_disc = terms.discounted_strike();

    match terms.regime {
        Regime::Degenerate { .. } => PriceResult {
            call: intrinsic_call(s, k_disc),
            put: intrinsic_put(s, k_disc),
        },
        Regime::Diffusive { .. } => {
            let p = terms.probabilities();
            // Clamp rounding noise in the far tails
            PriceResult {
                call: (s * p.nd1 - k_disc * p.nd2).max(0.0),
                put: (k_disc * p.n_minus_d2 - s * p.n_minus_d1).max(0.0),
            }
        }
    }
}
