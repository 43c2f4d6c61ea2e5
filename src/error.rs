//! Error types for pricing operations.
//!
//! Every failure the core can report is a rejected input. The degenerate
//! regime (`σ = 0` or `T = 0`) is a defined limit, not an error.

use thiserror::Error;

/// Pricing errors returned synchronously to the caller.
///
/// # Examples
/// ```
/// use greeks_lib::PricingError;
///
/// let err = PricingError::invalid("spot", 0.0, "must be positive");
/// assert_eq!(err.field(), "spot");
/// assert!(err.to_string().contains("spot"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PricingError {
    /// An input is outside the domain of the closed-form formulas.
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: &'static str,
    },
}

impl PricingError {
    pub fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// Name of the input that caused the failure, for highlighting the
    /// matching control in a UI.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { field, .. } => field,
        }
    }
}

/// Convenience alias used throughout the pricing modules.
pub type PricingResult<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::invalid("maturity", -1.0, "must be non-negative");
        assert_eq!(
            format!("{}", err),
            "Invalid input: maturity = -1 (must be non-negative)"
        );
    }

    #[test]
    fn test_error_trait_and_anyhow_conversion() {
        let err = PricingError::invalid("strike", 0.0, "must be positive");
        let _: &dyn std::error::Error = &err;

        let wrapped: anyhow::Error = err.into();
        assert_eq!(wrapped.downcast_ref::<PricingError>(), Some(&err));
    }
}
