//! # Greeks-Lib: Closed-Form European Option Pricing
//!
//! `greeks-lib` is a small, dependency-light Rust library that prices European calls and puts
//! under the Black-Scholes model, computes their Greeks, and builds profit-and-loss curves over a
//! range of hypothetical underlying prices. It is the numerical engine behind an interactive
//! pricing dashboard: the UI collects parameters and renders results, the library does the math.
//!
//! ## Core Features
//!
//! - **Pricing**: Analytic call and put values with an explicit limit for `σ = 0` or `T = 0`
//! - **Greeks**: Delta, Gamma, Vega, Theta and Rho for both legs from shared d1/d2 terms
//! - **PnL Curves**: Expiry payoff (or mark-to-market) PnL across a caller-chosen spot grid
//! - **Pure Functions**: No global state, no I/O; every call is safe to run concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use greeks_lib::{default_configs, evaluate, greeks, price, PricingInputs};
//!
//! // S = 100, X = 100, r = 5%, σ = 20%, T = 1 year
//! let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
//!
//! let prices = price(&inputs)?;
//! let sensitivities = greeks(&inputs)?;
//! println!("Call {:.4} / Put {:.4}", prices.call, prices.put);
//! println!("Delta {:.4}, Gamma {:.4}", sensitivities.call_delta, sensitivities.gamma);
//!
//! // Or recompute everything the dashboard shows in one call
//! let snapshot = evaluate(&inputs, &default_configs::dashboard())?;
//! assert_eq!(snapshot.pnl.len(), 100);
//! # Ok::<(), greeks_lib::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Vega is per unit of volatility; use [`GreeksResult::vega_per_point`] or
//!   [`VegaConvention::PerPoint`] for the per-1% figure.
//! - Theta is calendar decay per year (negative of ∂V/∂T).
//! - Invalid inputs (`S <= 0`, `X <= 0`, `σ < 0`, `T < 0`, non-finite) fail with
//!   [`PricingError::InvalidInput`]; they never produce `NaN`.
//!
//! ## Configuration Presets
//!
//! The library provides several sweep presets for the PnL curve:
//! - `dashboard()`: 50% to 150% of spot, 100 points
//! - `fine()`: 25% to 175% of spot, 500 points
//! - `coarse()`: 50% to 150% of spot, 21 points
//! - `minimal()`: 80% to 120% of spot, 5 points

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod evaluation;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error types
pub use error::{PricingError, PricingResult};

// Value types shared by every entry point
pub use evaluation::{
    config::{EvaluationConfig, SweepConfig},
    pipeline::{evaluate, evaluate_with_premiums},
    types::{
        Breakevens, EvaluationSnapshot, GreeksResult, PnlPoint, PnlSeries, PriceResult,
        PricingInputs, VegaConvention,
    },
};

// Model entry points
pub use models::bs::{greeks, price, BlackScholesTerms};
pub use models::pnl::{pnl_curve, pnl_curve_with_method, EntryPremiums, PnlMethod, SpotSweep};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured evaluation settings for common use cases.
///
/// All presets price with expiry-payoff PnL and report vega per unit volatility; they differ
/// only in the spot grid used for the PnL curve.
///
/// # Available Configurations
///
/// - [`dashboard()`]: The interactive dashboard grid
/// - [`fine()`]: Dense grid for publication-quality charts
/// - [`coarse()`]: Sparse grid for tabular output
/// - [`minimal()`]: Five-point grid for quick checks
pub mod default_configs {
    use crate::evaluation::config::EvaluationConfig;

    /// Configuration matching the interactive pricing dashboard.
    ///
    /// **Characteristics:**
    /// - Spot grid: 50% to 150% of the current spot
    /// - Grid points: 100
    /// - PnL method: expiry payoff minus model premium
    ///
    /// # Example
    ///
    /// ```rust
    /// use greeks_lib::default_configs;
    ///
    /// let config = default_configs::dashboard();
    /// assert_eq!(config.sweep.points, 100);
    /// ```
    pub fn dashboard() -> EvaluationConfig {
        EvaluationConfig::dashboard()
    }

    /// Dense configuration for smooth charts.
    ///
    /// **Characteristics:**
    /// - Spot grid: 25% to 175% of the current spot
    /// - Grid points: 500
    pub fn fine() -> EvaluationConfig {
        EvaluationConfig::fine()
    }

    /// Sparse configuration for tables and reports.
    ///
    /// **Characteristics:**
    /// - Spot grid: 50% to 150% of the current spot
    /// - Grid points: 21 (5% steps)
    pub fn coarse() -> EvaluationConfig {
        EvaluationConfig::coarse()
    }

    /// Minimal configuration for quick validation and debugging.
    ///
    /// **Characteristics:**
    /// - Spot grid: 80% to 120% of the current spot
    /// - Grid points: 5 (10% steps)
    pub fn minimal() -> EvaluationConfig {
        EvaluationConfig::minimal()
    }
}
