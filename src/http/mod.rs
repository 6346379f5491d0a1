//! HTTP transport module
//!
//! Provides the reqwest-backed [`Transport`](crate::resource::Transport).
//!
//! # Features
//!
//! - **Standard headers**: `x-ms-version`, `x-ms-date` and `Accept` on every request
//! - **Authorization**: Integration with the auth module
//! - **Timeouts**: Per-client request timeout surfaced as a transport error
//!
//! No retries or rate limiting happen at this layer.

mod client;

pub use client::{rfc1123_date, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
