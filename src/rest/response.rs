//! Response wrappers for REST resource operations.
//!
//! [`ResourceResponse<T>`] pairs a single decoded resource with response
//! metadata and implements `Deref<Target = T>`, so the resource's fields are
//! reachable directly:
//!
//! ```rust,ignore
//! let plan = Plan::find(&client, "P-5ML4271244454362WXNWU5NQ").await?;
//! println!("{} is {:?}", plan.name, plan.status);
//! println!("debug id: {:?}", plan.debug_id());
//! ```
//!
//! [`ResourceList<T>`] is the result of a paginated listing. Listing is
//! best-effort: when a page fetch fails, the items gathered so far are kept
//! and the failure is recorded in [`ResourceList::error`].
//!
//! ```rust,ignore
//! let products = Product::all(&client, None).await;
//! for product in products.iter() {
//!     println!("- {}", product.name);
//! }
//! if let Some(error) = products.error() {
//!     eprintln!("listing stopped early: {error}");
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::rest::ResourceError;

/// A single resource returned by the API.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec![1, 2, 3], 200, Some("f0a1b2".to_string()));
///
/// // Access the data via Deref
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.debug_id(), Some("f0a1b2"));
///
/// let data: Vec<i32> = response.into_inner();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    status: u16,
    debug_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, status: u16, debug_id: Option<String>) -> Self {
        Self {
            data,
            status,
            debug_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the `PayPal-Debug-Id` of the response.
    #[must_use]
    pub fn debug_id(&self) -> Option<&str> {
        self.debug_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            status: self.status,
            debug_id: self.debug_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// The aggregated result of a paginated listing.
///
/// Items are in server order across pages. `error` is set when a page fetch
/// failed; the items fetched before the failure are still present.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::ResourceList;
///
/// let list = ResourceList::new(vec!["PROD-1", "PROD-2"], None, 1, Some(2));
///
/// assert!(list.is_ok());
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.total_items(), Some(2));
/// assert_eq!(list.into_result().unwrap(), vec!["PROD-1", "PROD-2"]);
/// ```
#[derive(Debug)]
pub struct ResourceList<T> {
    items: Vec<T>,
    error: Option<ResourceError>,
    pages_fetched: u32,
    total_items: Option<u64>,
}

impl<T> ResourceList<T> {
    /// Creates a new list.
    #[must_use]
    pub const fn new(
        items: Vec<T>,
        error: Option<ResourceError>,
        pages_fetched: u32,
        total_items: Option<u64>,
    ) -> Self {
        Self {
            items,
            error,
            pages_fetched,
            total_items,
        }
    }

    /// Creates an empty list that failed before fetching anything.
    #[must_use]
    pub const fn failed(error: ResourceError) -> Self {
        Self::new(Vec::new(), Some(error), 0, None)
    }

    /// Returns `true` if every page was fetched without error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the error that stopped the listing, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ResourceError> {
        self.error.as_ref()
    }

    /// Returns the number of pages fetched successfully.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Returns the server-reported `total_items`, when requested.
    #[must_use]
    pub const fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Returns the items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Converts into a `Result`, discarding partial items on failure.
    ///
    /// # Errors
    ///
    /// Returns the recorded error if the listing stopped early.
    pub fn into_result(self) -> Result<Vec<T>, ResourceError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.items),
        }
    }

    /// Splits into the items and the optional error.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<ResourceError>) {
        (self.items, self.error)
    }
}

impl<T> Deref for ResourceList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Verify wrappers are Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceList<String>>();
};
