use crate::error::PricingResult;
use crate::evaluation::types::{PricingInputs, VegaConvention};
use crate::models::pnl::{PnlMethod, SpotSweep};

#[cfg(feature = "serde")]
use anyhow::{Context, Result};
#[cfg(feature = "serde")]
use std::path::Path;

/// Spot grid for the PnL curve, relative to the current spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Lowest swept spot as a multiple of the current spot
    pub lower_multiple: f64,
    /// Highest swept spot as a multiple of the current spot
    pub upper_multiple: f64,
    /// Number of grid points, both bounds included
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            lower_multiple: default_lower_multiple(),
            upper_multiple: default_upper_multiple(),
            points: default_points(),
        }
    }
}

impl SweepConfig {
    /// Absolute grid around `spot`.
    pub fn sweep_for(&self, spot: f64) -> PricingResult<SpotSweep> {
        SpotSweep::around(spot, self.lower_multiple, self.upper_multiple, self.points)
    }
}

/// Settings for a full dashboard evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub sweep: SweepConfig,

    /// Valuation used for every point of the PnL curve
    #[cfg_attr(feature = "serde", serde(default))]
    pub pnl_method: PnlMethod,

    /// Unit of the vega reported in snapshots
    #[cfg_attr(feature = "serde", serde(default))]
    pub vega_convention: VegaConvention,

    /// Inputs a collaborator shows before the user changes anything
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_inputs: PricingInputs,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl EvaluationConfig {
    /// 50% to 150% of spot in 100 points, expiry payoff, vega per unit.
    pub fn dashboard() -> Self {
        Self {
            sweep: SweepConfig::default(),
            pnl_method: PnlMethod::ExpiryPayoff,
            vega_convention: VegaConvention::PerUnit,
            default_inputs: PricingInputs::default(),
        }
    }

    /// Dense, wide grid for smooth charts
    pub fn fine() -> Self {
        Self {
            sweep: SweepConfig {
                lower_multiple: 0.25,
                upper_multiple: 1.75,
                points: 500,
            },
            ..Self::dashboard()
        }
    }

    /// Sparse grid for tables
    pub fn coarse() -> Self {
        Self {
            sweep: SweepConfig {
                lower_multiple: 0.5,
                upper_multiple: 1.5,
                points: 21,
            },
            ..Self::dashboard()
        }
    }

    /// Five points within ±20% of spot, for quick checks
    pub fn minimal() -> Self {
        Self {
            sweep: SweepConfig {
                lower_multiple: 0.8,
                upper_multiple: 1.2,
                points: 5,
            },
            ..Self::dashboard()
        }
    }

    /// Parse a TOML document. Missing sections fall back to [`Self::dashboard`].
    ///
    /// ```rust
    /// use greeks_lib::{EvaluationConfig, PnlMethod};
    ///
    /// let config = EvaluationConfig::from_toml_str(r#"
    ///     pnl_method = "mark_to_market"
    ///
    ///     [sweep]
    ///     points = 11
    /// "#)?;
    /// assert_eq!(config.pnl_method, PnlMethod::MarkToMarket);
    /// assert_eq!(config.sweep.points, 11);
    /// assert_eq!(config.sweep.lower_multiple, 0.5);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse evaluation config")
    }

    /// Read and parse a TOML config file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

fn default_lower_multiple() -> f64 {
    0.5
}

fn default_upper_multiple() -> f64 {
    1.5
}

fn default_points() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_produce_valid_sweeps() {
        for config in [
            EvaluationConfig::dashboard(),
            EvaluationConfig::fine(),
            EvaluationConfig::coarse(),
            EvaluationConfig::minimal(),
        ] {
            let sweep = config.sweep.sweep_for(100.0).unwrap();
            assert_eq!(sweep.spots().len(), config.sweep.points);
        }
    }

    #[test]
    fn test_dashboard_defaults() {
        let config = EvaluationConfig::default();
        assert_eq!(config.sweep.points, 100);
        assert_eq!(config.pnl_method, PnlMethod::ExpiryPayoff);
        assert_eq!(config.vega_convention, VegaConvention::PerUnit);
        assert_eq!(config.default_inputs, PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_toml_is_dashboard() {
        let config = EvaluationConfig::from_toml_str("").unwrap();
        assert_eq!(config, EvaluationConfig::dashboard());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_full_toml() {
        let config = EvaluationConfig::from_toml_str(
            r#"
            pnl_method = "expiry_payoff"
            vega_convention = "per_point"

            [sweep]
            lower_multiple = 0.8
            upper_multiple = 1.2
            points = 9

            [default_inputs]
            spot = 42.0
            strike = 40.0
            rate = 0.1
            volatility = 0.2
            maturity = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.vega_convention, VegaConvention::PerPoint);
        assert_eq!(config.sweep.points, 9);
        assert_eq!(config.default_inputs.strike, 40.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bad_toml_reports_context() {
        let err = EvaluationConfig::from_toml_str("pnl_method = \"sideways\"").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse evaluation config"));

        let err = EvaluationConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
