// demos/pricing_demo.rs

//! Text rendition of the pricing dashboard
//!
//! This example shows how to:
//! 1. Build pricing inputs from user-supplied values
//! 2. Recompute prices, Greeks and the PnL curve in one call
//! 3. Surface invalid inputs as a validation message
//!
//! Usage:
//!     cargo run --example pricing_demo -- [S] [X] [r] [sigma] [T]

use anyhow::{Context, Result};
use greeks_lib::{default_configs, evaluate, PricingError, PricingInputs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = parse_inputs(std::env::args().skip(1).collect())?;
    let config = default_configs::coarse();

    println!("Black-Scholes Option Pricing Dashboard with Greeks");
    println!("==================================================");
    println!("Stock Price (S):        {:.2}", inputs.spot);
    println!("Strike Price (X):       {:.2}", inputs.strike);
    println!("Risk-Free Rate (r):     {:.4}", inputs.rate);
    println!("Volatility (σ):         {:.4}", inputs.volatility);
    println!("Time to Maturity (T):   {:.2} years", inputs.maturity);

    let snapshot = match evaluate(&inputs, &config) {
        Ok(snapshot) => snapshot,
        Err(PricingError::InvalidInput { field, reason, .. }) => {
            println!("\nInvalid input: {} {}", field, reason);
            return Ok(());
        }
    };

    let g = &snapshot.greeks;
    println!("\nCall Option Prices and Greeks");
    println!("  Call Option Price: ${:.2}", snapshot.prices.call);
    println!("  Delta: {:.4}", g.call_delta);
    println!("  Gamma: {:.4}", g.gamma);
    println!("  Vega:  {:.4}", g.vega);
    println!("  Theta: {:.4}", g.call_theta);
    println!("  Rho:   {:.4}", g.call_rho);

    println!("\nPut Option Prices and Greeks");
    println!("  Put Option Price: ${:.2}", snapshot.prices.put);
    println!("  Delta: {:.4}", g.put_delta);
    println!("  Gamma: {:.4}", g.gamma);
    println!("  Vega:  {:.4}", g.vega);
    println!("  Theta: {:.4}", g.put_theta);
    println!("  Rho:   {:.4}", g.put_rho);

    println!("\nPnL at Expiration");
    println!("{:<12} {:<12} {:<12}", "Stock Price", "Call PnL", "Put PnL");
    println!("{}", "-".repeat(36));
    for point in &snapshot.pnl {
        println!(
            "{:<12.2} {:<12.2} {:<12.2}",
            point.spot, point.call_pnl, point.put_pnl
        );
    }

    let be = snapshot.pnl.breakevens();
    if let Some(call) = be.call {
        println!("\nCall break-even: {:.2}", call);
    }
    if let Some(put) = be.put {
        println!("Put break-even:  {:.2}", put);
    }

    Ok(())
}

/// Positional arguments override the dashboard's initial values.
fn parse_inputs(args: Vec<String>) -> Result<PricingInputs> {
    let mut values = [
        PricingInputs::default().spot,
        PricingInputs::default().strike,
        PricingInputs::default().rate,
        PricingInputs::default().volatility,
        PricingInputs::default().maturity,
    ];
    let names = ["S", "X", "r", "sigma", "T"];

    for (i, arg) in args.iter().take(values.len()).enumerate() {
        values[i] = arg
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", names[i], arg))?;
    }

    Ok(PricingInputs::new(
        values[0], values[1], values[2], values[3], values[4],
    ))
}
