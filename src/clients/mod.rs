//! HTTP client types for PayPal API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the PayPal REST API. It handles request/response processing,
//! bearer tokens, timeouts and retry logic.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//! - [`RetryPolicy`]: Backoff settings for idempotent requests
//! - [`TransportError`]: Failures that produced no HTTP response
//! - [`rest::RestClient`]: Higher-level REST API client
//!
//! # Retry Behavior
//!
//! - **GET**: retried on network failures, timeouts and 429/500/502/503/504
//!   with exponential backoff and jitter, up to `max_retries` times
//! - **POST / PATCH**: never retried automatically
//! - **401**: the token is refreshed once and the request replayed, for
//!   every method
//!
//! Non-2xx responses are returned as [`HttpResponse`] values, not errors.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod retry;

pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};
pub use retry::{RetryPolicy, RETRYABLE_STATUSES};

pub use rest::RestClient;
