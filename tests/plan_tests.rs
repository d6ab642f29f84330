//! Integration tests for billing plans.

mod common;

use common::{client_for, plan_attrs, plan_body, unprocessable_body, PLAN_ID, PRODUCT_ID};
use paypal_subscriptions::rest::resources::v1::common::Money;
use paypal_subscriptions::rest::resources::v1::{
    IntervalUnit, Plan, PlanListParams, PlanStatus, PricingSchemeList, TenureType,
};
use paypal_subscriptions::rest::{RemoteErrorKind, ResourceError, RestResource};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetched_plan(status: &str) -> Plan {
    serde_json::from_value(plan_body(PLAN_ID, PRODUCT_ID, status)).unwrap()
}

#[tokio::test]
async fn test_create_sends_billing_cycles_and_preferences() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/billing/plans"))
        .and(body_partial_json(json!({
            "product_id": PRODUCT_ID,
            "name": "The Collegian Monthly",
            "status": "ACTIVE",
            "billing_cycles": [
                {
                    "frequency": {"interval_unit": "MONTH", "interval_count": 1},
                    "tenure_type": "TRIAL",
                    "sequence": 1,
                    "total_cycles": 1,
                    "pricing_scheme": {"fixed_price": {"currency_code": "USD", "value": "0"}}
                },
                {
                    "frequency": {"interval_unit": "MONTH", "interval_count": 1},
                    "tenure_type": "REGULAR",
                    "sequence": 2,
                    "total_cycles": 12,
                    "pricing_scheme": {"fixed_price": {"currency_code": "USD", "value": "29.99"}}
                }
            ],
            "payment_preferences": {
                "auto_bill_outstanding": true,
                "setup_fee_failure_action": "CONTINUE",
                "payment_failure_threshold": 3
            },
            "taxes": {"percentage": "12", "inclusive": false}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(plan_body(PLAN_ID, PRODUCT_ID, "ACTIVE")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = Plan::create(&client, &plan_attrs(PRODUCT_ID)).await.unwrap();

    assert_eq!(plan.id(), Some(PLAN_ID));
    assert_eq!(plan.status, Some(PlanStatus::Active));
    assert_eq!(plan.billing_cycles.len(), 2);

    let regular = plan.billing_cycle(2).unwrap();
    assert_eq!(regular.tenure_type, TenureType::Regular);
    assert_eq!(regular.frequency.interval_unit, IntervalUnit::Month);
    assert_eq!(
        regular.pricing_scheme.as_ref().unwrap().fixed_price,
        Some(Money::new("USD", "29.99"))
    );
}

#[tokio::test]
async fn test_create_for_unknown_product_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/billing/plans"))
        .respond_with(ResponseTemplate::new(422).set_body_json(unprocessable_body(
            "INVALID_PRODUCT_ID",
            "The product ID is invalid.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Plan::create(&client, &plan_attrs("PROD-MISSING"))
        .await
        .unwrap_err();

    let remote = err.remote().unwrap();
    assert_eq!(remote.kind, RemoteErrorKind::Unprocessable);
    assert!(remote.has_issue("INVALID_PRODUCT_ID"));
}

#[tokio::test]
async fn test_find_decodes_plan() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(plan_body(PLAN_ID, PRODUCT_ID, "INACTIVE")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = Plan::find(&client, PLAN_ID).await.unwrap();

    assert_eq!(plan.status, Some(PlanStatus::Inactive));
    assert_eq!(plan.product_id, PRODUCT_ID);
    assert_eq!(plan.quantity_supported, Some(true));
}

#[tokio::test]
async fn test_deactivate_then_activate_updates_local_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}/deactivate")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}/activate")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut plan = fetched_plan("ACTIVE");

    plan.deactivate(&client).await.unwrap();
    assert_eq!(plan.status, Some(PlanStatus::Inactive));

    plan.activate(&client).await.unwrap();
    assert_eq!(plan.status, Some(PlanStatus::Active));
}

#[tokio::test]
async fn test_rejected_transition_keeps_local_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}/activate")))
        .respond_with(ResponseTemplate::new(422).set_body_json(unprocessable_body(
            "PLAN_STATUS_INVALID",
            "Invalid plan status for activate action; plan status should be inactive or created.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut plan = fetched_plan("ACTIVE");

    let err = plan.activate(&client).await.unwrap_err();

    assert!(err.remote().unwrap().has_issue("PLAN_STATUS_INVALID"));
    assert_eq!(plan.status, Some(PlanStatus::Active));
}

#[tokio::test]
async fn test_activate_without_id_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let mut plan = plan_attrs(PRODUCT_ID);

    let err = plan.activate(&client).await.unwrap_err();

    assert!(matches!(
        err,
        ResourceError::PathResolutionFailed {
            resource: "Plan",
            operation: "activate"
        }
    ));
}

#[tokio::test]
async fn test_update_pricing_posts_overrides() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}/update-pricing-schemes")))
        .and(body_json(json!({
            "pricing_schemes": [
                {
                    "billing_cycle_sequence": 2,
                    "pricing_scheme": {"fixed_price": {"currency_code": "USD", "value": "34.99"}}
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = fetched_plan("ACTIVE");
    let schemes = PricingSchemeList::new().with_fixed_price(2, Money::new("USD", "34.99"));

    plan.update_pricing(&client, &schemes).await.unwrap();

    // Local prices stay as fetched.
    let regular = plan.billing_cycle(2).unwrap();
    assert_eq!(
        regular.pricing_scheme.as_ref().unwrap().fixed_price,
        Some(Money::new("USD", "29.99"))
    );
}

#[tokio::test]
async fn test_update_pricing_with_duplicate_sequence_is_rejected_by_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}/update-pricing-schemes")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "name": "UNPROCESSABLE_ENTITY",
            "message": "The requested action could not be performed, semantically incorrect, or failed business validation.",
            "debug_id": "1a2b3c4d5e6f7",
            "details": [{
                "field": "/pricing_schemes/1/billing_cycle_sequence",
                "location": "body",
                "issue": "DUPLICATE_BILLING_CYCLE_SEQUENCE",
                "description": "Duplicate billing_cycle_sequence."
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = fetched_plan("ACTIVE");
    let schemes = PricingSchemeList::new()
        .with_fixed_price(2, Money::new("USD", "34.99"))
        .with_fixed_price(2, Money::new("USD", "39.99"));
    assert!(schemes.has_duplicate_sequences());

    let err = plan.update_pricing(&client, &schemes).await.unwrap_err();

    let remote = err.remote().unwrap();
    assert!(remote.is_validation());
    assert!(remote.has_issue("DUPLICATE_BILLING_CYCLE_SEQUENCE"));
    assert_eq!(err.debug_id(), Some("1a2b3c4d5e6f7"));
}

#[tokio::test]
async fn test_all_filters_by_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/billing/plans"))
        .and(query_param("product_id", PRODUCT_ID))
        .and(query_param("plan_ids", "P-1,P-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plans": [
                {
                    "id": "P-1",
                    "product_id": PRODUCT_ID,
                    "name": "Monthly",
                    "status": "ACTIVE",
                    "usage_type": "LICENSED",
                    "create_time": "2019-11-24T11:40:52Z"
                },
                {
                    "id": "P-2",
                    "product_id": PRODUCT_ID,
                    "name": "Yearly",
                    "status": "INACTIVE",
                    "usage_type": "LICENSED",
                    "create_time": "2019-11-24T11:40:52Z"
                }
            ],
            "total_items": 2,
            "total_pages": 1,
            "links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = PlanListParams {
        product_id: Some(PRODUCT_ID.to_string()),
        plan_ids: Some(vec!["P-1".to_string(), "P-2".to_string()]),
        ..Default::default()
    };

    let plans = Plan::all(&client, Some(params)).await.into_result().unwrap();

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].status, Some(PlanStatus::Active));
    assert_eq!(plans[1].status, Some(PlanStatus::Inactive));
    assert!(plans.iter().all(|p| p.product_id == PRODUCT_ID));
}

#[tokio::test]
async fn test_unknown_status_value_still_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/billing/plans/{PLAN_ID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(plan_body(PLAN_ID, PRODUCT_ID, "ARCHIVED")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = Plan::find(&client, PLAN_ID).await.unwrap();

    assert_eq!(plan.status, Some(PlanStatus::Unknown));
}
