//! Version-specific REST resource implementations.
//!
//! ```text
//! resources/
//!   mod.rs    <- This file (re-exports the current version)
//!   v1/
//!     mod.rs  <- Product, Plan, Subscription and their embedded types
//! ```
//!
//! The current version is re-exported at this level:
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::resources::Plan;      // current version
//! use paypal_subscriptions::rest::resources::v1::Plan;  // explicit version
//! ```

pub mod v1;

pub use v1::*;
