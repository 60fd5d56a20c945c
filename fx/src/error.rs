//! FX engine error types.

use curconv_common::{Currency, CurrencyPair};
use thiserror::Error;

/// Errors that can occur while loading pairs or resolving a rate.
#[derive(Debug, Error)]
pub enum FxError {
    /// A line of pair input could not be turned into a currency pair.
    #[error("Line {line} is invalid; {reason}; got '{content}'")]
    InvalidInput {
        line: usize,
        content: String,
        reason: String,
    },

    /// A pair carried a rate that cannot weight an edge.
    #[error("Invalid rate {value} for {}/{}", .pair.left, .pair.right)]
    InvalidRate { pair: CurrencyPair, value: f64 },

    /// No pair ever referenced this currency.
    #[error("No connecting currency pair provided for {0}")]
    UnknownCurrency(Currency),

    /// Both currencies are known but the traversal found no path between them.
    #[error("No conversion path from {from} to {to}")]
    NoPath { from: Currency, to: Currency },

    /// The pair input could not be read.
    #[error("Failed to read currency pairs: {0}")]
    Io(#[from] std::io::Error),
}

impl FxError {
    /// Get a stable error code for structured output.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::InvalidInput { .. } => "INVALID_INPUT",
            FxError::InvalidRate { .. } => "INVALID_RATE",
            FxError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            FxError::NoPath { .. } => "NO_PATH",
            FxError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_line_and_content() {
        let err = FxError::InvalidInput {
            line: 3,
            content: "USD,CAD".to_string(),
            reason: "must have exactly 3 values between commas".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Line 3 is invalid; must have exactly 3 values between commas; got 'USD,CAD'"
        );
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_currency_message() {
        let err = FxError::UnknownCurrency(Currency::new("XYZ"));
        assert_eq!(err.to_string(), "No connecting currency pair provided for XYZ");
    }
}
