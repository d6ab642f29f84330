//! Pricing schemes and pricing-scheme overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Money;

/// The price of a billing cycle.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingScheme {
    /// The fixed amount charged per cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<Money>,

    /// The scheme version, incremented by PayPal on every pricing update.
    #[serde(skip_serializing)]
    pub version: Option<u32>,

    /// When the scheme was created.
    #[serde(skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the scheme was last updated.
    #[serde(skip_serializing)]
    pub update_time: Option<DateTime<Utc>>,
}

impl PricingScheme {
    /// Creates a fixed-price scheme.
    #[must_use]
    pub fn fixed(price: Money) -> Self {
        Self {
            fixed_price: Some(price),
            ..Self::default()
        }
    }
}

/// A replacement price for one billing cycle of an existing plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingSchemeOverride {
    /// The `sequence` of the billing cycle to reprice.
    pub billing_cycle_sequence: u32,

    /// The new price.
    pub pricing_scheme: PricingScheme,
}

/// A set of pricing overrides applied atomically by `Plan::update_pricing`.
///
/// Each `billing_cycle_sequence` should appear once. The list does not
/// enforce this; PayPal rejects duplicates and the rejection surfaces as a
/// remote error.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::resources::v1::PricingSchemeList;
/// use paypal_subscriptions::rest::resources::v1::common::Money;
///
/// let schemes = PricingSchemeList::new()
///     .with_fixed_price(1, Money::new("USD", "50"))
///     .with_fixed_price(2, Money::new("USD", "100"));
///
/// assert_eq!(schemes.len(), 2);
/// assert!(!schemes.has_duplicate_sequences());
///
/// let body = serde_json::to_value(&schemes).unwrap();
/// assert_eq!(body["pricing_schemes"][1]["pricing_scheme"]["fixed_price"]["value"], "100");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingSchemeList {
    /// The overrides in request order.
    pub pricing_schemes: Vec<PricingSchemeOverride>,
}

impl PricingSchemeList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fixed-price override for `billing_cycle_sequence`.
    #[must_use]
    pub fn with_fixed_price(mut self, billing_cycle_sequence: u32, price: Money) -> Self {
        self.pricing_schemes.push(PricingSchemeOverride {
            billing_cycle_sequence,
            pricing_scheme: PricingScheme::fixed(price),
        });
        self
    }

    /// Returns the number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pricing_schemes.len()
    }

    /// Returns `true` if the list has no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pricing_schemes.is_empty()
    }

    /// Returns `true` if a billing-cycle sequence appears more than once.
    #[must_use]
    pub fn has_duplicate_sequences(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        !self
            .pricing_schemes
            .iter()
            .all(|o| seen.insert(o.billing_cycle_sequence))
    }
}
