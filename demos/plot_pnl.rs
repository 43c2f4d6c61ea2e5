// Example: plot_pnl.rs
// Evaluates the dashboard for one set of inputs and writes the PnL of a long
// call and a long put to pnl.svg, plus the raw series to pnl.csv.
//
// Usage:
//     cargo run --example plot_pnl -- [S] [X] [r] [sigma] [T]
//
// Set RUST_LOG=greeks_lib=debug to see the evaluation trace.

use std::error::Error;

use greeks_lib::{default_configs, evaluate, PnlSeries, PricingInputs};
use plotters::prelude::*;
use tracing_subscriber::EnvFilter;

fn parse_inputs() -> Result<PricingInputs, Box<dyn Error>> {
    let defaults = PricingInputs::default();
    let mut values = vec![
        defaults.spot,
        defaults.strike,
        defaults.rate,
        defaults.volatility,
        defaults.maturity,
    ];
    for (slot, arg) in values.iter_mut().zip(std::env::args().skip(1)) {
        *slot = arg.parse()?;
    }
    Ok(PricingInputs::new(
        values[0], values[1], values[2], values[3], values[4],
    ))
}

fn write_csv(series: &PnlSeries, path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in series {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = parse_inputs()?;
    let snapshot = evaluate(&inputs, &default_configs::fine())?;
    let series = &snapshot.pnl;

    write_csv(series, "pnl.csv")?;
    println!("Series written to pnl.csv ({} points)", series.len());

    let spots = series.spots();
    let call = series.call_pnl();
    let put = series.put_pnl();

    let x_min = spots[0];
    let x_max = spots[spots.len() - 1];
    let y_min = call
        .iter()
        .chain(put.iter())
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let y_max = call
        .iter()
        .chain(put.iter())
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    // 5% padding so the curves do not touch the frame
    let padding = (y_max - y_min) * 0.05;

    let root = SVGBackend::new("pnl.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "PnL of Call and Put Options | S={:.2} X={:.2} r={:.3} σ={:.2} T={:.2}",
                inputs.spot, inputs.strike, inputs.rate, inputs.volatility, inputs.maturity
            ),
            ("sans-serif", 26),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - padding)..(y_max + padding))?;

    chart
        .configure_mesh()
        .x_desc("Stock Price at Expiration")
        .y_desc("PnL")
        .draw()?;

    // Zero line
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    chart.draw_series(vec![PathElement::new(
        spots.iter().copied().zip(call.iter().copied()).collect::<Vec<_>>(),
        RED.stroke_width(2),
    )])?;
    chart.draw_series(vec![PathElement::new(
        spots.iter().copied().zip(put.iter().copied()).collect::<Vec<_>>(),
        BLUE.stroke_width(2),
    )])?;

    let be = series.breakevens();
    for (level, color) in [(be.call, RED), (be.put, BLUE)] {
        if let Some(x) = level {
            chart.draw_series(std::iter::once(Circle::new((x, 0.0), 4, color.filled())))?;
        }
    }

    root.present()?;
    println!("Chart saved to pnl.svg");
    Ok(())
}
