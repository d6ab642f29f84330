//! REST Resource infrastructure for the PayPal catalog and billing APIs.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: create, find, list, patch and action
//!   invocation with default implementations
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper for a single resource
//! - **[`ResourceList<T>`]**: a best-effort paginated listing with `error`
//! - **[`Patch`]**: JSON-Patch operations for partial updates
//! - **[`codec`]**: sparse JSON encoding and tolerant decoding
//! - **Path building**: templates keyed by [`ResourceOperation`]
//! - **[`ResourceError`] / [`RemoteError`]**: the error/result model
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::{ClientConfig, RestClient};
//! use paypal_subscriptions::rest::{Patch, RestResource};
//! use paypal_subscriptions::rest::resources::v1::{Plan, Product, Subscription};
//!
//! let client = RestClient::new(&ClientConfig::from_env()?)?;
//!
//! let product = Product::create(&client, &product_attrs).await?;
//!
//! let mut plan = Plan::create(&client, &plan_attrs).await?;
//! plan.activate(&client).await?;
//!
//! let mut subscription = Subscription::create(&client, &subscription_attrs).await?;
//! subscription
//!     .update(&client, &[Patch::replace("/quantity", "5")])
//!     .await?;
//!
//! match subscription.cancel(&client, "Not satisfied with the service").await {
//!     Ok(()) => {}
//!     Err(e) => eprintln!("cancel rejected: {e}"),
//! }
//! ```

pub mod codec;
mod errors;
mod patch;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::{DecodeError, RemoteError, RemoteErrorDetail, RemoteErrorKind, ResourceError};
pub use patch::{Patch, PatchOp};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{ensure_success, RestResource, PREFER_HEADER, REQUEST_ID_HEADER};
pub use response::{ResourceList, ResourceResponse};
