// Prints the built-in evaluation presets, or a config loaded from a TOML file.
//
// Usage:
//     cargo run --example default_configs -- [demos/dashboard.toml]

use greeks_lib::{default_configs, evaluate, EvaluationConfig};

fn describe(name: &str, config: &EvaluationConfig) {
    println!("{}:", name);
    println!(
        "   Spot grid: {:.0}% to {:.0}% of spot",
        config.sweep.lower_multiple * 100.0,
        config.sweep.upper_multiple * 100.0
    );
    println!("   Grid points: {}", config.sweep.points);
    println!("   PnL method: {:?}", config.pnl_method);
    println!("   Vega convention: {:?}", config.vega_convention);

    match evaluate(&config.default_inputs, config) {
        Ok(snapshot) => {
            let be = snapshot.pnl.breakevens();
            println!(
                "   Call {:.4} / Put {:.4}, call break-even {}",
                snapshot.prices.call,
                snapshot.prices.put,
                be.call
                    .map(|s| format!("{:.2}", s))
                    .unwrap_or_else(|| "outside grid".to_string())
            );
        }
        Err(e) => println!("   ❌ {}", e),
    }
    println!();
}

fn main() {
    println!("Greeks-lib Default Configuration Examples\n");

    if let Some(path) = std::env::args().nth(1) {
        match EvaluationConfig::from_file(&path) {
            Ok(config) => describe(&format!("Loaded from {}", path), &config),
            Err(e) => eprintln!("❌ {:#}", e),
        }
        return;
    }

    describe("1. Dashboard (interactive UI)", &default_configs::dashboard());
    describe("2. Fine (smooth charts)", &default_configs::fine());
    describe("3. Coarse (tables)", &default_configs::coarse());
    describe("4. Minimal (quick checks)", &default_configs::minimal());
}
