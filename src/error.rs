//! Error types for the SWAPI client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::ResourceKind;
use thiserror::Error;

/// The main error type for the SWAPI client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Record Errors
    // ============================================================================
    #[error("{kind} record has no '{field}' field")]
    MissingField { kind: ResourceKind, field: String },

    #[error("Expected a {expected} record, got {actual}")]
    KindMismatch {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Page {page} of {kind} returned no items before the reported count was reached")]
    EmptyPage { kind: ResourceKind, page: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(kind: ResourceKind, field: impl Into<String>) -> Self {
        Self::MissingField {
            kind,
            field: field.into(),
        }
    }

    /// Whether this error came from the transport layer (network, HTTP or payload decoding)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::InvalidUrl(_)
                | Error::JsonParse(_)
                | Error::Decode { .. }
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for the SWAPI client
pub type Result<T> = std::result::Result<T, Error>;
