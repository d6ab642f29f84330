//! REST API client for the PayPal v1 REST API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for the catalog and billing endpoints.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/billing/plans` -> `billing/plans`
//! - A redundant version prefix is stripped: `v1/billing/plans` -> `billing/plans`
//! - Empty paths are rejected
//!
//! # Retry Behavior
//!
//! GET requests are retried with exponential backoff on network failures,
//! timeouts, and 429/5xx responses. POST and PATCH are sent once; use a
//! `PayPal-Request-Id` to make a create safely repeatable.

mod client;

pub use client::{RestClient, API_BASE_PATH};
