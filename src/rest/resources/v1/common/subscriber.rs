//! Subscriber identity and shipping details.

use serde::{Deserialize, Serialize};

/// A person's name split into parts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Name {
    /// The given (first) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// The surname (family name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

/// A full name as a single string, used for shipping.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FullName {
    /// The full name (e.g., "John Doe").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl FullName {
    /// Creates a full name.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
        }
    }
}

/// A postal address in PayPal's portable format.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::resources::v1::common::Address;
///
/// let address = Address {
///     address_line_1: Some("2211 N First Street".to_string()),
///     address_line_2: Some("Building 17".to_string()),
///     admin_area_2: Some("San Jose".to_string()),
///     admin_area_1: Some("CA".to_string()),
///     postal_code: Some("95131".to_string()),
///     country_code: "US".to_string(),
/// };
///
/// let json = serde_json::to_value(&address).unwrap();
/// assert_eq!(json["admin_area_2"], "San Jose");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,

    /// Suite, building or apartment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,

    /// City or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<String>,

    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<String>,

    /// The postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The two-letter ISO 3166-1 country code.
    pub country_code: String,
}

/// Where a subscription's goods are shipped.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingDetail {
    /// The recipient's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FullName>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// The person paying for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Subscriber {
    /// The subscriber's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,

    /// The subscriber's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// The PayPal payer ID, assigned once the subscriber approves.
    #[serde(skip_serializing)]
    pub payer_id: Option<String>,

    /// Where goods are shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscriber_round_trips_the_wire_shape() {
        let body = json!({
            "name": {"given_name": "John", "surname": "Doe"},
            "email_address": "customer@example.com",
            "payer_id": "2J6QB8YJQSJRJ",
            "shipping_address": {
                "name": {"full_name": "John Doe"},
                "address": {
                    "address_line_1": "2211 N First Street",
                    "address_line_2": "Building 17",
                    "admin_area_2": "San Jose",
                    "admin_area_1": "CA",
                    "postal_code": "95131",
                    "country_code": "US"
                }
            }
        });

        let subscriber: Subscriber = serde_json::from_value(body).unwrap();
        assert_eq!(subscriber.payer_id.as_deref(), Some("2J6QB8YJQSJRJ"));

        let shipping = subscriber.shipping_address.as_ref().unwrap();
        assert_eq!(shipping.name, Some(FullName::new("John Doe")));
        assert_eq!(shipping.address.as_ref().unwrap().postal_code.as_deref(), Some("95131"));

        // payer_id is assigned by PayPal and never sent
        let encoded = serde_json::to_value(&subscriber).unwrap();
        assert!(encoded.get("payer_id").is_none());
        assert_eq!(encoded["name"]["surname"], "Doe");
    }
}
