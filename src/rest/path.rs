//! Path building infrastructure for REST resources.
//!
//! Each resource declares a table of [`ResourcePath`]s, one per operation it
//! supports. Lifecycle actions (`activate`, `suspend`, ...) are operations
//! too, addressed by name through [`ResourceOperation::Action`].
//!
//! # Example
//!
//! ```rust
//! use paypal_subscriptions::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use paypal_subscriptions::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "billing/plans/{id}"),
//!     ResourcePath::new(
//!         HttpMethod::Post,
//!         ResourceOperation::Action("activate"),
//!         &["id"],
//!         "billing/plans/{id}/activate",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Action("activate"), &["id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "P-5ML4271244454362WXNWU5NQ");
//! assert_eq!(
//!     build_path(path.template, &ids),
//!     "billing/plans/P-5ML4271244454362WXNWU5NQ/activate"
//! );
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Patch an existing resource (PATCH /resources/{id}).
    Update,
    /// A named sub-path of a resource (e.g., POST /resources/{id}/activate).
    Action(&'static str),
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create | Self::Action(_) => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Action(name) => name,
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders, relative to `/v1`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation and available IDs, then picks the one with the
/// most required IDs (the most specific).
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Values are percent-encoded so an ID can never escape its path segment.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
