use crate::error::PricingResult;
use crate::evaluation::config::EvaluationConfig;
use crate::evaluation::types::{EvaluationSnapshot, PricingInputs};
use crate::models::bs::{greeks_from_terms, price_from_terms, BlackScholesTerms};
use crate::models::pnl::{pnl_curve_from_terms, EntryPremiums};

/// Recompute everything the dashboard shows for one set of inputs.
///
/// This is the single entry point a UI calls whenever any parameter changes:
/// the d1/d2 terms are computed once and shared by prices, Greeks and the PnL
/// curve. The curve is swept around `inputs.spot` as described by
/// `config.sweep`, with both legs entered at the model price.
///
/// # Errors
///
/// [`crate::PricingError::InvalidInput`] if `inputs` are out of domain or the
/// configured sweep is empty or inverted.
pub fn evaluate(
    inputs: &PricingInputs,
    config: &EvaluationConfig,
) -> PricingResult<EvaluationSnapshot> {
    evaluate_with_premiums(inputs, config, EntryPremiums::model())
}

/// Like [`evaluate`], with caller-supplied entry premiums for the PnL curve.
pub fn evaluate_with_premiums(
    inputs: &PricingInputs,
    config: &EvaluationConfig,
    premiums: EntryPremiums,
) -> PricingResult<EvaluationSnapshot> {
    let _span = tracing::debug_span!("evaluate", spot = inputs.spot, strike = inputs.strike)
        .entered();

    let terms = BlackScholesTerms::new(inputs).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected pricing inputs");
    })?;

    if terms.is_degenerate() {
        tracing::debug!(
            volatility = inputs.volatility,
            maturity = inputs.maturity,
            "degenerate regime, pricing at discounted intrinsic value"
        );
    }

    let prices = price_from_terms(&terms);
    let greeks = config.vega_convention.apply(greeks_from_terms(&terms));

    let spots = config
        .sweep
        .sweep_for(inputs.spot)
        .inspect_err(|e| tracing::warn!(error = %e, "rejected spot sweep"))?
        .spots();
    let pnl = pnl_curve_from_terms(&terms, &prices, &spots, premiums, config.pnl_method)?;

    tracing::debug!(
        call = prices.call,
        put = prices.put,
        points = pnl.len(),
        method = ?config.pnl_method,
        "evaluation complete"
    );

    Ok(EvaluationSnapshot {
        inputs: *inputs,
        prices,
        greeks,
        vega_convention: config.vega_convention,
        pnl,
    })
}
