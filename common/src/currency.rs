//! Currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a currency code is blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Currency code cannot be empty")]
pub struct EmptyCurrencyCode;

/// An opaque currency code such as `USD`.
///
/// Codes are compared exactly as written; `usd` and `USD` are different
/// currencies. Surrounding whitespace is stripped when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a code, taken verbatim.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Common currencies
    pub fn usd() -> Self {
        Self::new("USD")
    }

    pub fn eur() -> Self {
        Self::new("EUR")
    }

    pub fn gbp() -> Self {
        Self::new("GBP")
    }

    pub fn cad() -> Self {
        Self::new("CAD")
    }

    pub fn chf() -> Self {
        Self::new("CHF")
    }
}

impl FromStr for Currency {
    type Err = EmptyCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(EmptyCurrencyCode);
        }
        Ok(Self(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let currency: Currency = "  USD ".parse().unwrap();
        assert_eq!(currency, Currency::usd());
        assert_eq!(currency.code(), "USD");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!("   ".parse::<Currency>(), Err(EmptyCurrencyCode));
        assert_eq!("".parse::<Currency>(), Err(EmptyCurrencyCode));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_ne!(Currency::new("usd"), Currency::usd());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Currency::chf()).unwrap();
        assert_eq!(json, "\"CHF\"");
    }
}
