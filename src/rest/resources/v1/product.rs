//! Catalog product resource.
//!
//! A product describes the goods or service a plan bills for. Products are
//! created once and then referenced by plans through `product_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::{Patch, RestResource};
//! use paypal_subscriptions::rest::resources::v1::{Product, ProductListParams, ProductType};
//!
//! let attrs = Product {
//!     name: "The Collegian".to_string(),
//!     product_type: Some(ProductType::Physical),
//!     category: Some("BOOKS_PERIODICALS_AND_NEWSPAPERS".to_string()),
//!     ..Default::default()
//! };
//! let product = Product::create(&client, &attrs).await?;
//!
//! product
//!     .update(&client, &[Patch::replace("/description", "Weekly edition")])
//!     .await?;
//!
//! let params = ProductListParams { page_size: Some(20), ..Default::default() };
//! let products = Product::all(&client, Some(params)).await;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::LinkDescription;

/// The kind of goods a product represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Physical goods.
    #[default]
    Physical,
    /// Digital goods.
    Digital,
    /// A service.
    Service,
    /// A type this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A catalog product.
///
/// ## Writable Fields
/// - `id` - optional; PayPal generates one when omitted
/// - `name`, `description`, `product_type`, `category`, `image_url`, `home_url`
///
/// ## Read-Only Fields
/// - `create_time`, `update_time`, `links`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The product name.
    pub name: String,

    /// The product description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The product type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// The product category (e.g., `SOFTWARE`, `BOOKS_PERIODICALS_AND_NEWSPAPERS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The product image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The product home page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing)]
    pub update_time: Option<DateTime<Utc>>,

    /// HATEOAS links.
    #[serde(default, skip_serializing)]
    pub links: Vec<LinkDescription>,
}

impl RestResource for Product {
    type AllParams = ProductListParams;

    const NAME: &'static str = "Product";
    const COLLECTION_KEY: &'static str = "products";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "catalogs/products/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "catalogs/products"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "catalogs/products"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "catalogs/products/{id}",
        ),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Items per page (1-20, PayPal's default is 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The first page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Ask PayPal to include `total_items` and `total_pages`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_required: Option<bool>,
}
