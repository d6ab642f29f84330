//! Common types embedded in several resources.
//!
//! These are not REST resources themselves (they don't implement
//! `RestResource`), but appear as nested data in products, plans and
//! subscriptions.
//!
//! # Example
//!
//! ```rust
//! use paypal_subscriptions::rest::resources::v1::common::{Money, Name, Subscriber};
//!
//! let subscriber = Subscriber {
//!     name: Some(Name {
//!         given_name: Some("John".to_string()),
//!         surname: Some("Doe".to_string()),
//!     }),
//!     email_address: Some("customer@example.com".to_string()),
//!     ..Default::default()
//! };
//! let shipping = Money::new("USD", "9.00");
//! ```

mod link;
mod money;
mod subscriber;

pub use link::{find_link, LinkDescription};
pub use money::Money;
pub use subscriber::{Address, FullName, Name, ShippingDetail, Subscriber};
