//! REST Resource trait for CRUD and lifecycle operations.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface over the PayPal catalog and billing endpoints.
//! Resources that implement this trait gain `create()`, `find()`, `all()`,
//! `update()` and `invoke_action()` with default implementations.
//!
//! # Implementing a Resource
//!
//! 1. Define the model with serde derives; optional fields use
//!    `skip_serializing_if = "Option::is_none"`
//! 2. Implement `RestResource` with the paths the resource supports
//! 3. Add typed wrappers for lifecycle actions on top of `invoke_action()`
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::{RestResource, ResourcePath, ResourceOperation};
//! use paypal_subscriptions::HttpMethod;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Product {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Product {
//!     type AllParams = ProductListParams;
//!
//!     const NAME: &'static str = "Product";
//!     const COLLECTION_KEY: &'static str = "products";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "catalogs/products/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "catalogs/products"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "catalogs/products"),
//!         ResourcePath::new(HttpMethod::Patch, ResourceOperation::Update, &["id"], "catalogs/products/{id}"),
//!     ];
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::clients::{HttpMethod, HttpResponse, PaginationInfo, RestClient};
use crate::rest::{
    build_path, codec, get_path, Patch, RemoteError, ResourceError, ResourceList,
    ResourceOperation, ResourcePath, ResourceResponse,
};

/// Header asking PayPal to return the full resource on create.
pub const PREFER_HEADER: &str = "Prefer";

/// Header carrying a client-chosen idempotency key.
pub const REQUEST_ID_HEADER: &str = "PayPal-Request-Id";

/// A REST resource that can be created, fetched, listed and patched.
///
/// # Associated Types and Constants
///
/// - `AllParams`: query parameters for listing (use `()` when the resource
///   cannot be listed)
/// - `NAME`: the singular name (e.g., "Plan")
/// - `COLLECTION_KEY`: the key holding items in a list body (e.g., "plans")
/// - `PATHS`: the endpoints the resource supports
///
/// # Error Model
///
/// Every operation that sends a request returns `Result<_, ResourceError>`.
/// A 4xx/5xx answer becomes [`ResourceError::Remote`] carrying the parsed
/// PayPal error, so callers inspect it rather than unwind. Listing is
/// best-effort and returns a [`ResourceList`] with its own `error`.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Query parameters for the `all()` operation.
    type AllParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource.
    const NAME: &'static str;

    /// The key of the item array in a list body.
    const COLLECTION_KEY: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the server-assigned ID, or `None` before creation.
    fn id(&self) -> Option<&str>;

    /// Resolves the method and path for an operation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// path for the operation, or the path needs an ID that was not given.
    fn resolve_path(
        operation: ResourceOperation,
        id: Option<&str>,
    ) -> Result<(HttpMethod, String), ResourceError> {
        let mut ids: HashMap<&str, &str> = HashMap::new();
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            ids.insert("id", id);
        }

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok((path.http_method, build_path(path.template, &ids)))
    }

    /// Creates the resource on the server.
    ///
    /// Sends `Prefer: return=representation` and returns the server's copy,
    /// which carries the assigned `id`, status and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] when PayPal rejects the attributes
    /// (validation failures carry per-field `details`).
    /// Returns [`ResourceError::Decode`] if the response has no `id`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::create(&client, &attrs).await?;
    /// println!("created {}", product.id().unwrap_or_default());
    /// ```
    async fn create(client: &RestClient, attrs: &Self) -> Result<Self, ResourceError> {
        create_resource(client, attrs, None).await
    }

    /// Creates the resource with a `PayPal-Request-Id`.
    ///
    /// Repeating the call with the same request ID returns the resource
    /// created by the first call instead of creating a duplicate.
    ///
    /// # Errors
    ///
    /// Same as [`RestResource::create`].
    async fn create_with_request_id(
        client: &RestClient,
        attrs: &Self,
        request_id: &str,
    ) -> Result<Self, ResourceError> {
        create_resource(client, attrs, Some(request_id)).await
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] of kind `NotFound` if the resource
    /// doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let plan = Plan::find(&client, "P-5ML4271244454362WXNWU5NQ").await?;
    /// println!("Found: {}", plan.name);
    /// ```
    async fn find(client: &RestClient, id: &str) -> Result<ResourceResponse<Self>, ResourceError> {
        let (_, path) = Self::resolve_path(ResourceOperation::Find, Some(id))?;

        debug!(resource = Self::NAME, id, "finding resource");
        let response = ensure_success(client.get(&path, None).await?)?;

        let status = response.code;
        let debug_id = response.debug_id().map(ToString::to_string);
        let data = codec::decode_identified(Self::NAME, response.body)?;

        Ok(ResourceResponse::new(data, status, debug_id))
    }

    /// Lists all resources matching the given parameters.
    ///
    /// Follows the `next` links until every page is consumed. See
    /// [`RestResource::all_with_page_limit`].
    async fn all(client: &RestClient, params: Option<Self::AllParams>) -> ResourceList<Self> {
        Self::all_with_page_limit(client, params, None).await
    }

    /// Lists resources, fetching at most `page_limit` pages.
    ///
    /// Pages are fetched sequentially and their items concatenated in server
    /// order. When a page fetch fails, the items already fetched are kept
    /// and the failure is recorded in the list's `error`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let plans = Plan::all_with_page_limit(&client, None, Some(2)).await;
    /// if let Some(error) = plans.error() {
    ///     eprintln!("stopped after {} pages: {error}", plans.pages_fetched());
    /// }
    /// ```
    async fn all_with_page_limit(
        client: &RestClient,
        params: Option<Self::AllParams>,
        page_limit: Option<u32>,
    ) -> ResourceList<Self> {
        let path = match Self::resolve_path(ResourceOperation::All, None) {
            Ok((_, path)) => path,
            Err(e) => return ResourceList::failed(e),
        };

        let mut query = match codec::encode_query(Self::NAME, &params.unwrap_or_default()) {
            Ok(query) => query,
            Err(e) => return ResourceList::failed(e),
        };

        let mut page = query
            .get("page")
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1);
        let mut items = Vec::new();
        let mut pages_fetched = 0;
        let mut total_items = None;

        loop {
            if page_limit.is_some_and(|limit| pages_fetched >= limit) {
                break;
            }

            let (page_items, pagination, total) =
                match fetch_page::<Self>(client, &path, &query).await {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        warn!(resource = Self::NAME, page, error = %e, "page fetch failed");
                        return ResourceList::new(items, Some(e), pages_fetched, total_items);
                    }
                };

            pages_fetched += 1;
            total_items = total_items.or(total);

            let fetched = page_items.len();
            items.extend(page_items);
            debug!(resource = Self::NAME, page, fetched, "fetched page");

            if fetched == 0 {
                break;
            }

            match next_page(&pagination, page) {
                Some(next) => {
                    page = next;
                    query.insert("page".to_string(), next.to_string());
                }
                None => break,
            }
        }

        ResourceList::new(items, None, pages_fetched, total_items)
    }

    /// Applies JSON-Patch operations to the resource.
    ///
    /// Local fields are not modified; call `find` to observe the server's
    /// state after the update.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// `id` or cannot be updated.
    /// Returns [`ResourceError::Remote`] if PayPal rejects a patch.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// product
    ///     .update(&client, &[Patch::replace("/description", "Weekly edition")])
    ///     .await?;
    /// ```
    async fn update(&self, client: &RestClient, patches: &[Patch]) -> Result<(), ResourceError> {
        let id = self
            .id()
            .filter(|id| !id.is_empty())
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Update.as_str(),
            })?;

        let (_, path) = Self::resolve_path(ResourceOperation::Update, Some(id))?;
        let body = codec::encode(Self::NAME, patches)?;

        debug!(resource = Self::NAME, id, patches = patches.len(), "patching resource");
        ensure_success(client.patch(&path, body, None).await?)?;

        Ok(())
    }

    /// Invokes a named action sub-path of the resource (e.g., `activate`).
    ///
    /// Returns the successful response so typed wrappers can decode a body
    /// when the action has one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// such action.
    /// Returns [`ResourceError::Remote`] if PayPal rejects the transition.
    async fn invoke_action(
        client: &RestClient,
        id: &str,
        action: &'static str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Action(action), Some(id))?;

        debug!(resource = Self::NAME, id, action, "invoking action");
        let response = match method {
            HttpMethod::Get => client.get(&path, None).await?,
            HttpMethod::Post => client.post(&path, body, None).await?,
            HttpMethod::Patch => {
                client
                    .patch(&path, body.unwrap_or_else(|| Value::Array(Vec::new())), None)
                    .await?
            }
        };

        ensure_success(response)
    }
}

/// Converts a non-2xx response into [`ResourceError::Remote`].
///
/// # Errors
///
/// Returns the parsed [`RemoteError`] for any status outside 2xx.
pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse, ResourceError> {
    if response.is_ok() {
        Ok(response)
    } else {
        let error = RemoteError::from_http_response(&response);
        debug!(status = error.status, name = %error.name, "remote error");
        Err(error.into())
    }
}

async fn create_resource<R: RestResource>(
    client: &RestClient,
    attrs: &R,
    request_id: Option<&str>,
) -> Result<R, ResourceError> {
    let (_, path) = R::resolve_path(ResourceOperation::Create, None)?;
    let body = codec::encode(R::NAME, attrs)?;

    let mut headers = HashMap::new();
    headers.insert(PREFER_HEADER.to_string(), "return=representation".to_string());
    if let Some(request_id) = request_id {
        headers.insert(REQUEST_ID_HEADER.to_string(), request_id.to_string());
    }

    debug!(resource = R::NAME, "creating resource");
    let response = ensure_success(client.post(&path, Some(body), Some(headers)).await?)?;

    Ok(codec::decode_identified(R::NAME, response.body)?)
}

async fn fetch_page<R: RestResource>(
    client: &RestClient,
    path: &str,
    query: &HashMap<String, String>,
) -> Result<(Vec<R>, PaginationInfo, Option<u64>), ResourceError> {
    let query = (!query.is_empty()).then(|| query.clone());
    let response = ensure_success(client.get(path, query).await?)?;

    let items = codec::decode_list(R::NAME, &response.body, R::COLLECTION_KEY)?;
    let total = response.body.get("total_items").and_then(Value::as_u64);

    Ok((items, response.pagination, total))
}

/// Picks the page after `current` from the `next` link, falling back to
/// `total_pages`. Never moves backwards.
fn next_page(pagination: &PaginationInfo, current: u32) -> Option<u32> {
    let next = pagination.next_page.or_else(|| {
        pagination
            .total_pages
            .filter(|&total| current < total)
            .map(|_| current + 1)
    })?;

    (next > current).then_some(next)
}
