//! HTTP client module
//!
//! Provides the `reqwest`-backed client used by the default transport.
//!
//! # Features
//!
//! - **Base URL resolution**: relative paths are joined onto the configured root
//! - **Header and query plumbing**: default headers plus per-request overrides
//! - **Error classification**: non-2xx, timeouts and network failures map to distinct errors

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
