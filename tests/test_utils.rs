#![allow(dead_code)] // Each test binary uses a different subset of helpers

use greeks_lib::{GreeksResult, PriceResult, PricingInputs};
use serde::Deserialize;

/// Reference row: inputs and the expected Black-Scholes outputs
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub call: f64,
    pub put: f64,
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

impl ReferenceRow {
    pub fn inputs(&self) -> PricingInputs {
        PricingInputs::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }

    pub fn prices(&self) -> PriceResult {
        PriceResult {
            call: self.call,
            put: self.put,
        }
    }

    pub fn greeks(&self) -> GreeksResult {
        GreeksResult {
            call_delta: self.call_delta,
            put_delta: self.put_delta,
            gamma: self.gamma,
            vega: self.vega,
            call_theta: self.call_theta,
            put_theta: self.put_theta,
            call_rho: self.call_rho,
            put_rho: self.put_rho,
        }
    }
}

/// Load the reference table shipped with the tests
pub fn load_reference_rows() -> Result<Vec<ReferenceRow>, Box<dyn std::error::Error>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/reference_prices.csv");
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// The at-the-money textbook case: S = X = 100, r = 5%, σ = 20%, T = 1
pub fn atm_inputs() -> PricingInputs {
    PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0)
}
