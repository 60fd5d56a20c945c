//! Directly observed pair rates and the hops composed from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Currency;

/// Whether a rate can weight a graph edge: finite and strictly positive.
pub fn is_valid_rate(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A directly observed conversion: `1 left = value right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency being converted from.
    pub left: Currency,
    /// Currency being converted to.
    pub right: Currency,
    /// Units of `right` per unit of `left`.
    pub value: f64,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(left: Currency, right: Currency, value: f64) -> Self {
        Self { left, right, value }
    }

    /// Get the inverse pair, `1 right = 1/value left`.
    pub fn inverse(&self) -> Self {
        Self {
            left: self.right.clone(),
            right: self.left.clone(),
            value: 1.0 / self.value,
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} @ {}", self.left, self.right, self.value)
    }
}

/// One step of a derived conversion path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

impl Hop {
    pub fn new(from: Currency, to: Currency, rate: f64) -> Self {
        Self { from, to, rate }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {:.6} {}", self.from, self.rate, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_inverse() {
        let pair = CurrencyPair::new(Currency::usd(), Currency::cad(), 1.25);
        let inverse = pair.inverse();

        assert_eq!(inverse.left, Currency::cad());
        assert_eq!(inverse.right, Currency::usd());
        assert_eq!(inverse.value, 0.8);
    }

    #[test]
    fn test_rate_validity() {
        assert!(is_valid_rate(1.35));
        assert!(is_valid_rate(f64::MIN_POSITIVE));
        assert!(!is_valid_rate(0.0));
        assert!(!is_valid_rate(-1.0));
        assert!(!is_valid_rate(f64::NAN));
        assert!(!is_valid_rate(f64::INFINITY));
    }

    #[test]
    fn test_hop_display() {
        let hop = Hop::new(Currency::usd(), Currency::cad(), 1.35);
        assert_eq!(hop.to_string(), "1 USD = 1.350000 CAD");
    }
}
