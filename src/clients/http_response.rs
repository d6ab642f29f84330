//! HTTP response types for the PayPal subscriptions SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Pagination information parsed from the HATEOAS `links` array of a
/// collection response.
///
/// PayPal list endpoints return links such as
/// `{"href": "https://api-m.paypal.com/v1/billing/plans?page_size=2&page=2", "rel": "next", "method": "GET"}`.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::clients::PaginationInfo;
/// use serde_json::json;
///
/// let info = PaginationInfo::from_body(&json!({
///     "links": [
///         {"href": "https://api-m.paypal.com/v1/billing/plans?page_size=2&page=1", "rel": "prev", "method": "GET"},
///         {"href": "https://api-m.paypal.com/v1/billing/plans?page_size=2&page=3", "rel": "next", "method": "GET"}
///     ]
/// }));
/// assert_eq!(info.next_page, Some(3));
/// assert_eq!(info.prev_page, Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The `href` of the `next` link, if present.
    pub next_href: Option<String>,
    /// The `page` number of the `next` link, if present.
    pub next_page: Option<u32>,
    /// The `page` number of the `prev` link, if present.
    pub prev_page: Option<u32>,
    /// The `total_pages` value of the body, if present.
    pub total_pages: Option<u32>,
}

impl PaginationInfo {
    /// Parses pagination info from a response body.
    #[must_use]
    pub fn from_body(body: &serde_json::Value) -> Self {
        let mut result = Self {
            total_pages: body
                .get("total_pages")
                .and_then(serde_json::Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            ..Self::default()
        };

        let Some(links) = body.get("links").and_then(serde_json::Value::as_array) else {
            return result;
        };

        for link in links {
            let rel = link.get("rel").and_then(serde_json::Value::as_str);
            let href = link.get("href").and_then(serde_json::Value::as_str);

            if let (Some(rel), Some(href)) = (rel, href) {
                match rel {
                    "next" => {
                        result.next_page = Self::extract_page(href);
                        result.next_href = Some(href.to_string());
                    }
                    "prev" | "previous" => result.prev_page = Self::extract_page(href),
                    _ => {}
                }
            }
        }

        result
    }

    /// Extracts the `page` query parameter from a URL.
    fn extract_page(url: &str) -> Option<u32> {
        let query_start = url.find('?')?;
        let query = &url[query_start + 1..];

        query.split('&').find_map(|param| {
            let mut parts = param.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some("page"), Some(value)) => value.parse().ok(),
                _ => None,
            }
        })
    }
}

/// An HTTP response from the PayPal API.
///
/// Contains the status code, lower-cased headers, the parsed JSON body and
/// pagination info derived from the body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Pagination info parsed from the body's `links`.
    pub pagination: PaginationInfo,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header and link parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = PaginationInfo::from_body(&body);

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `PayPal-Debug-Id` header value, if present.
    ///
    /// Include this ID when reporting problems to PayPal.
    #[must_use]
    pub fn debug_id(&self) -> Option<&str> {
        self.header("paypal-debug-id")
    }
}
