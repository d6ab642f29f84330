//! Integration tests for catalog products.

mod common;

use common::{bearer, client_for, product_attrs, product_body, PRODUCT_ID};
use paypal_subscriptions::rest::resources::v1::{Product, ProductListParams, ProductType};
use paypal_subscriptions::rest::{DecodeError, Patch, ResourceError, RestResource};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn list_item(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Periodical",
        "create_time": "2019-11-24T11:40:52Z",
        "links": [{
            "href": format!("https://api-m.sandbox.paypal.com/v1/catalogs/products/{id}"),
            "rel": "self",
            "method": "GET"
        }]
    })
}

fn page_link(page: u32, rel: &str) -> serde_json::Value {
    json!({
        "href": format!("https://api-m.sandbox.paypal.com/v1/catalogs/products?page_size=2&page={page}"),
        "rel": rel,
        "method": "GET"
    })
}

/// A product as `find` would have returned it, without a request.
fn fetched_product(id: &str) -> Product {
    serde_json::from_value(product_body(id)).unwrap()
}

#[tokio::test]
async fn test_create_posts_attributes_and_returns_representation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalogs/products"))
        .and(header("Authorization", bearer().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(json!({
            "name": "The Collegian",
            "type": "PHYSICAL",
            "category": "BOOKS_PERIODICALS_AND_NEWSPAPERS"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_body(PRODUCT_ID)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = Product::create(&client, &product_attrs()).await.unwrap();

    assert_eq!(product.id(), Some(PRODUCT_ID));
    assert_eq!(product.product_type, Some(ProductType::Physical));
    assert!(product.create_time.is_some());
    assert_eq!(product.links.len(), 1);
}

#[tokio::test]
async fn test_create_with_request_id_sends_idempotency_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalogs/products"))
        .and(header("PayPal-Request-Id", "PRODUCT-18062019-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_body(PRODUCT_ID)))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attrs = product_attrs();

    let first = Product::create_with_request_id(&client, &attrs, "PRODUCT-18062019-001")
        .await
        .unwrap();
    let second = Product::create_with_request_id(&client, &attrs, "PRODUCT-18062019-001")
        .await
        .unwrap();

    assert_eq!(first.id(), second.id());
}

#[tokio::test]
async fn test_create_validation_error_carries_details() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "name": "INVALID_REQUEST",
            "message": "Request is not well-formed, syntactically incorrect, or violates schema.",
            "debug_id": "b1d1f06c7246c",
            "details": [{
                "field": "/type",
                "value": "PHYSICAL_GOODS",
                "location": "body",
                "issue": "INVALID_PARAMETER_VALUE",
                "description": "The value of a field is invalid."
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Product::create(&client, &product_attrs()).await.unwrap_err();

    let remote = err.remote().unwrap();
    assert!(remote.is_validation());
    assert!(remote.has_issue("INVALID_PARAMETER_VALUE"));
    assert_eq!(remote.details[0].field.as_deref(), Some("/type"));
    assert_eq!(err.debug_id(), Some("b1d1f06c7246c"));
}

#[tokio::test]
async fn test_create_response_without_id_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "The Collegian"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Product::create(&client, &product_attrs()).await.unwrap_err();

    assert!(matches!(
        err,
        ResourceError::Decode(DecodeError::MissingId { resource: "Product" })
    ));
}

#[tokio::test]
async fn test_find_returns_product_with_response_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("PayPal-Debug-Id", "a1b2c3d4e5")
                .set_body_json(product_body(PRODUCT_ID)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = Product::find(&client, PRODUCT_ID).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.debug_id(), Some("a1b2c3d4e5"));
    assert_eq!(response.description.as_deref(), Some("Official newsletter of CPM University"));

    let product = response.into_inner();
    assert_eq!(product.home_url.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_find_after_create_returns_submitted_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_body(PRODUCT_ID)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_body(PRODUCT_ID)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attrs = product_attrs();
    let created = Product::create(&client, &attrs).await.unwrap();
    let found = Product::find(&client, created.id().unwrap()).await.unwrap().into_inner();

    assert_eq!(found.id(), created.id());
    assert_eq!(found.name, attrs.name);
    assert_eq!(found.description, attrs.description);
    assert_eq!(found.product_type, attrs.product_type);
    assert_eq!(found.category, attrs.category);
    assert_eq!(found.image_url, attrs.image_url);
    assert_eq!(found.home_url, attrs.home_url);
}

#[tokio::test]
async fn test_find_with_empty_id_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = Product::find(&client, "").await.unwrap_err();

    assert!(matches!(
        err,
        ResourceError::PathResolutionFailed {
            resource: "Product",
            operation: "find"
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_unknown_product_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products/PROD-UNKNOWN"))
        .respond_with(ResponseTemplate::new(404).set_body_json(common::not_found_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Product::find(&client, "PROD-UNKNOWN").await.unwrap_err();

    assert!(err.is_not_found());
    let remote = err.remote().unwrap();
    assert_eq!(remote.name, "RESOURCE_NOT_FOUND");
    assert!(remote.has_issue("INVALID_RESOURCE_ID"));
}

#[tokio::test]
async fn test_update_sends_json_patch_document() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .and(body_json(json!([
            {"op": "replace", "path": "/description", "value": "Weekly edition"},
            {"op": "add", "path": "/image_url", "value": "https://example.com/cover.png"}
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = fetched_product(PRODUCT_ID);

    product
        .update(
            &client,
            &[
                Patch::replace("/description", "Weekly edition"),
                Patch::add("/image_url", "https://example.com/cover.png"),
            ],
        )
        .await
        .unwrap();

    // Local fields are left as they were.
    assert_eq!(product.description.as_deref(), Some("Official newsletter of CPM University"));
}

#[tokio::test]
async fn test_update_without_id_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = product_attrs()
        .update(&client, &[Patch::replace("/description", "x")])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResourceError::PathResolutionFailed {
            resource: "Product",
            operation: "update"
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_with_empty_id_fails_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let product = Product {
        id: Some(String::new()),
        ..product_attrs()
    };
    let err = product
        .update(&client, &[Patch::replace("/description", "x")])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResourceError::PathResolutionFailed {
            resource: "Product",
            operation: "update"
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_after_update_returns_patched_value() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .and(body_json(json!([
            {"op": "replace", "path": "/description", "value": "Weekly edition"}
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut patched = product_body(PRODUCT_ID);
    patched["description"] = json!("Weekly edition");
    Mock::given(method("GET"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(patched))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = fetched_product(PRODUCT_ID);
    product
        .update(&client, &[Patch::replace("/description", "Weekly edition")])
        .await
        .unwrap();

    let found = Product::find(&client, PRODUCT_ID).await.unwrap();
    assert_eq!(found.description.as_deref(), Some("Weekly edition"));
    assert_eq!(found.name, product.name);
}

#[tokio::test]
async fn test_update_rejected_patch_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/v1/catalogs/products/{PRODUCT_ID}")))
        .respond_with(ResponseTemplate::new(422).set_body_json(common::unprocessable_body(
            "PATCH_PATH_NOT_SUPPORTED",
            "The specified field cannot be patched.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = fetched_product(PRODUCT_ID)
        .update(&client, &[Patch::replace("/type", "DIGITAL")])
        .await
        .unwrap_err();

    assert!(err.remote().unwrap().has_issue("PATCH_PATH_NOT_SUPPORTED"));
}

#[tokio::test]
async fn test_all_follows_next_links_across_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [list_item("PROD-3", "Gazette"), list_item("PROD-4", "Herald")],
            "links": [page_link(1, "prev"), page_link(3, "next")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [list_item("PROD-5", "Tribune")],
            "links": [page_link(2, "prev")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .and(query_param("page_size", "2"))
        .and(query_param("total_required", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_items": 5,
            "total_pages": 3,
            "products": [list_item("PROD-1", "Collegian"), list_item("PROD-2", "Courier")],
            "links": [page_link(2, "next")]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ProductListParams {
        page_size: Some(2),
        total_required: Some(true),
        ..Default::default()
    };

    let products = Product::all(&client, Some(params)).await;

    assert!(products.is_ok());
    assert_eq!(products.pages_fetched(), 3);
    assert_eq!(products.total_items(), Some(5));

    let ids: Vec<_> = products.iter().filter_map(|p| p.id()).collect();
    assert_eq!(ids, ["PROD-1", "PROD-2", "PROD-3", "PROD-4", "PROD-5"]);
}

#[tokio::test]
async fn test_all_with_page_limit_stops_early() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [list_item("PROD-1", "Collegian"), list_item("PROD-2", "Courier")],
            "links": [page_link(2, "next")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = Product::all_with_page_limit(&client, None, Some(1)).await;

    assert!(products.is_ok());
    assert_eq!(products.len(), 2);
    assert_eq!(products.pages_fetched(), 1);
}

#[tokio::test]
async fn test_all_on_empty_catalog_returns_no_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"links": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = Product::all(&client, None).await;

    assert!(products.is_ok());
    assert!(products.is_empty());
    assert_eq!(products.into_result().unwrap(), Vec::<Product>::new());
}

#[tokio::test]
async fn test_repeated_listing_returns_same_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalogs/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                list_item("PROD-2", "Courier"),
                list_item("PROD-1", "Collegian"),
                list_item("PROD-3", "Gazette")
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = Product::all(&client, None).await.into_result().unwrap();
    let second = Product::all(&client, None).await.into_result().unwrap();

    let first_ids: Vec<_> = first.iter().filter_map(|p| p.id()).collect();
    let second_ids: Vec<_> = second.iter().filter_map(|p| p.id()).collect();
    assert_eq!(first_ids, ["PROD-2", "PROD-1", "PROD-3"]);
    assert_eq!(first_ids, second_ids);
}
