//! Money amounts.

use serde::{Deserialize, Serialize};

/// An amount in a single currency.
///
/// `value` is a string to preserve decimal precision (e.g., `"29.99"`).
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::resources::v1::common::Money;
///
/// let fee = Money::new("USD", "9.00");
/// assert_eq!(fee.to_string(), "9.00 USD");
/// assert!(!fee.is_zero());
/// assert!(Money::new("USD", "0").is_zero());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct Money {
    /// The three-letter ISO 4217 currency code.
    pub currency_code: String,

    /// The amount.
    pub value: String,
}

impl Money {
    /// Creates a money amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if the amount is zero (`"0"`, `"0.00"`, ...).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.chars().all(|c| c == '0' || c == '.')
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_wire_format() {
        let money: Money =
            serde_json::from_value(json!({"currency_code": "USD", "value": "29.99"})).unwrap();
        assert_eq!(money, Money::new("USD", "29.99"));
        assert_eq!(
            serde_json::to_value(&money).unwrap(),
            json!({"currency_code": "USD", "value": "29.99"})
        );
    }

    #[test]
    fn test_is_zero() {
        assert!(Money::new("USD", "0.00").is_zero());
        assert!(!Money::new("USD", "10").is_zero());
        assert!(!Money::new("USD", "0.01").is_zero());
    }
}
