pub mod bs;
pub mod normal;
pub mod pnl;

/// Payoff helpers shared by the pricer and the PnL generator
pub mod utils {
    /// Long call payoff `max(spot - strike, 0)`.
    #[inline]
    pub fn intrinsic_call(spot: f64, strike: f64) -> f64 {
        (spot - strike).max(0.0)
    }

    /// Long put payoff `max(strike - spot, 0)`.
    #[inline]
    pub fn intrinsic_put(spot: f64, strike: f64) -> f64 {
        (strike - spot).max(0.0)
    }

    /// Limit of Φ(d1) as σ√T → 0: 1 when the call is in the money against the
    /// discounted strike, 0 when out of the money and 0.5 on the boundary.
    pub fn degenerate_itm_weight(spot: f64, discounted_strike: f64) -> f64 {
        if spot > discounted_strike {
            1.0
        } else if spot < discounted_strike {
            0.0
        } else {
            0.5
        }
    }
}
