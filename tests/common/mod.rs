//! Shared fixtures for integration tests.
//!
//! Attribute sets mirror a newspaper subscription: a physical product, a
//! plan with one free trial month followed by twelve paid months, and a
//! subscription for three copies shipped to San Jose.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use paypal_subscriptions::auth::{AccessToken, StaticTokenProvider};
use paypal_subscriptions::rest::resources::v1::common::{
    Address, FullName, Money, Name, ShippingDetail, Subscriber,
};
use paypal_subscriptions::rest::resources::v1::{
    ApplicationContext, BillingCycle, Frequency, PayeePreferred, PaymentMethod,
    PaymentPreferences, Plan, PlanStatus, PricingScheme, Product, ProductType,
    SetupFeeFailureAction, ShippingPreference, Subscription, Taxes, TenureType, UserAction,
};
use paypal_subscriptions::{ApiBaseUrl, ClientConfig, ClientId, ClientSecret, Environment};
use paypal_subscriptions::{RestClient, RetryPolicy};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "A21AAFEpH4PsADK7qSS7pSRsgzfENtu-Q1ysgEDVDESseMHBYXVJYE8ovjj68elIDy8nF26AwPhfXTIeWAZHSLIsQkSYz9ifg";

pub const PRODUCT_ID: &str = "PROD-XXCD1234QWER65782";
pub const PLAN_ID: &str = "P-5ML4271244454362WXNWU5NQ";
pub const SUBSCRIPTION_ID: &str = "I-BW452GLLEP1G";

/// Builds a configuration pointing at the mock server.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .environment(Environment::Custom(ApiBaseUrl::new(server.uri()).unwrap()))
        .timeout(Duration::from_secs(2))
        .retry_backoff(Duration::from_millis(5), Duration::from_millis(20))
        .build()
        .unwrap()
}

/// Fast, deterministic retries for tests.
pub fn test_retry_policy() -> RetryPolicy {
    RetryPolicy::new(2, Duration::from_millis(5), Duration::from_millis(20)).without_jitter()
}

/// Builds a client that presents `TEST_TOKEN` to the mock server.
pub fn client_for(server: &MockServer) -> RestClient {
    let provider = Arc::new(StaticTokenProvider::new(AccessToken::new(TEST_TOKEN)));
    RestClient::with_token_provider(&config_for(server), provider)
        .unwrap()
        .with_retry_policy(test_retry_policy())
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

// ============================================================================
// Attribute sets
// ============================================================================

pub fn product_attrs() -> Product {
    Product {
        name: "The Collegian".to_string(),
        description: Some("Official newsletter of CPM University".to_string()),
        product_type: Some(ProductType::Physical),
        category: Some("BOOKS_PERIODICALS_AND_NEWSPAPERS".to_string()),
        image_url: Some("https://example.com".to_string()),
        home_url: Some("https://example.com".to_string()),
        ..Default::default()
    }
}

fn monthly_cycle(tenure_type: TenureType, sequence: u32, total_cycles: u32, price: &str) -> BillingCycle {
    BillingCycle {
        frequency: Frequency::MONTHLY,
        tenure_type,
        sequence,
        total_cycles,
        pricing_scheme: Some(PricingScheme::fixed(Money::new("USD", price))),
    }
}

pub fn plan_attrs(product_id: &str) -> Plan {
    Plan {
        product_id: product_id.to_string(),
        name: "The Collegian Monthly".to_string(),
        description: Some("Monthly home delivery".to_string()),
        status: Some(PlanStatus::Active),
        billing_cycles: vec![
            monthly_cycle(TenureType::Trial, 1, 1, "0"),
            monthly_cycle(TenureType::Regular, 2, 12, "29.99"),
        ],
        payment_preferences: Some(PaymentPreferences {
            auto_bill_outstanding: Some(true),
            setup_fee: Some(Money::new("USD", "0")),
            setup_fee_failure_action: Some(SetupFeeFailureAction::Continue),
            payment_failure_threshold: Some(3),
        }),
        taxes: Some(Taxes {
            percentage: "12".to_string(),
            inclusive: Some(false),
        }),
        quantity_supported: Some(true),
        ..Default::default()
    }
}

pub fn subscription_attrs(plan_id: &str) -> Subscription {
    Subscription {
        plan_id: plan_id.to_string(),
        start_time: Some("2019-11-24T00:00:00Z".parse().unwrap()),
        quantity: Some("3".to_string()),
        shipping_amount: Some(Money::new("USD", "9.00")),
        subscriber: Some(Subscriber {
            name: Some(Name {
                given_name: Some("John".to_string()),
                surname: Some("Doe".to_string()),
            }),
            email_address: Some("customer@example.com".to_string()),
            payer_id: None,
            shipping_address: Some(ShippingDetail {
                name: Some(FullName::new("John Doe")),
                address: Some(Address {
                    address_line_1: Some("2211 N First Street".to_string()),
                    address_line_2: Some("Building 17".to_string()),
                    admin_area_2: Some("San Jose".to_string()),
                    admin_area_1: Some("CA".to_string()),
                    postal_code: Some("95131".to_string()),
                    country_code: "US".to_string(),
                }),
            }),
        }),
        application_context: Some(ApplicationContext {
            brand_name: Some("The Collegian".to_string()),
            locale: Some("en-US".to_string()),
            shipping_preference: Some(ShippingPreference::SetProvidedAddress),
            user_action: Some(UserAction::SubscribeNow),
            payment_method: Some(PaymentMethod {
                payer_selected: Some("PAYPAL".to_string()),
                payee_preferred: Some(PayeePreferred::ImmediatePaymentRequired),
            }),
            return_url: Some("https://example.com/returnUrl".to_string()),
            cancel_url: Some("https://example.com/cancelUrl".to_string()),
        }),
        ..Default::default()
    }
}

// ============================================================================
// Server responses
// ============================================================================

fn self_link(base: &str, id: &str) -> Value {
    json!({"href": format!("https://api-m.sandbox.paypal.com/v1/{base}/{id}"), "rel": "self", "method": "GET"})
}

pub fn product_body(id: &str) -> Value {
    json!({
        "id": id,
        "name": "The Collegian",
        "description": "Official newsletter of CPM University",
        "type": "PHYSICAL",
        "category": "BOOKS_PERIODICALS_AND_NEWSPAPERS",
        "image_url": "https://example.com",
        "home_url": "https://example.com",
        "create_time": "2019-11-24T11:40:52Z",
        "update_time": "2019-11-24T11:40:52Z",
        "links": [self_link("catalogs/products", id)]
    })
}

pub fn plan_body(id: &str, product_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "product_id": product_id,
        "name": "The Collegian Monthly",
        "description": "Monthly home delivery",
        "status": status,
        "billing_cycles": [
            {
                "frequency": {"interval_unit": "MONTH", "interval_count": 1},
                "tenure_type": "TRIAL",
                "sequence": 1,
                "total_cycles": 1,
                "pricing_scheme": {"version": 1, "fixed_price": {"currency_code": "USD", "value": "0"}}
            },
            {
                "frequency": {"interval_unit": "MONTH", "interval_count": 1},
                "tenure_type": "REGULAR",
                "sequence": 2,
                "total_cycles": 12,
                "pricing_scheme": {"version": 1, "fixed_price": {"currency_code": "USD", "value": "29.99"}}
            }
        ],
        "payment_preferences": {
            "auto_bill_outstanding": true,
            "setup_fee": {"currency_code": "USD", "value": "0"},
            "setup_fee_failure_action": "CONTINUE",
            "payment_failure_threshold": 3
        },
        "taxes": {"percentage": "12", "inclusive": false},
        "quantity_supported": true,
        "create_time": "2019-11-24T11:40:52Z",
        "update_time": "2019-11-24T11:40:52Z",
        "links": [self_link("billing/plans", id)]
    })
}

pub fn subscription_body(id: &str, plan_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "plan_id": plan_id,
        "status": status,
        "status_update_time": "2019-11-24T11:40:52Z",
        "start_time": "2019-11-24T00:00:00Z",
        "quantity": "3",
        "shipping_amount": {"currency_code": "USD", "value": "9.00"},
        "subscriber": {
            "name": {"given_name": "John", "surname": "Doe"},
            "email_address": "customer@example.com"
        },
        "create_time": "2019-11-24T11:40:52Z",
        "links": [
            {
                "href": "https://www.sandbox.paypal.com/webapps/billing/subscriptions?ba_token=BA-2M539689T3856352J",
                "rel": "approve",
                "method": "GET"
            },
            self_link("billing/subscriptions", id)
        ]
    })
}

/// A PayPal validation error body.
pub fn unprocessable_body(issue: &str, description: &str) -> Value {
    json!({
        "name": "UNPROCESSABLE_ENTITY",
        "message": "The requested action could not be performed, semantically incorrect, or failed business validation.",
        "debug_id": "f8a0b3c4d5e6f",
        "details": [{"issue": issue, "description": description}],
        "links": []
    })
}

/// A PayPal not-found error body.
pub fn not_found_body() -> Value {
    json!({
        "name": "RESOURCE_NOT_FOUND",
        "message": "The specified resource does not exist.",
        "debug_id": "7c1a2b3d4e5f6",
        "details": [{"issue": "INVALID_RESOURCE_ID", "description": "Requested resource ID was not found."}]
    })
}
