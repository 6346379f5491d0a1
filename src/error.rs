//! Error types for the collections client
//!
//! Every public API returns `Result<T, Error>`. Nothing in the crate retries
//! or swallows an error; each variant is handed straight back to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error payload returned by the service alongside a non-success status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    /// Service error code (e.g. "NotFound", "Conflict")
    #[serde(default)]
    pub code: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl ServerError {
    /// Decode a response body into a server error.
    ///
    /// Bodies that are not the usual `{code, message}` JSON keep their raw text
    /// in `message` so nothing the server said is lost.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<ServerError>(body) {
            Ok(err) if !err.code.is_empty() || !err.message.is_empty() => err,
            _ => Self {
                code: String::new(),
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.is_empty(), self.message.is_empty()) {
            (true, true) => write!(f, "<empty body>"),
            (true, false) => write!(f, "{}", self.message),
            (false, true) => write!(f, "{}", self.code),
            (false, false) => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

/// The main error type for the collections client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Local Precondition Errors
    // ============================================================================
    #[error("Precondition missing: {header} requires a non-empty etag")]
    PreconditionMissing { header: String },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("Unexpected HTTP status {status} (expected {expected}): {error}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        error: ServerError,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Authorization failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing-etag precondition error for the given header
    pub fn precondition_missing(header: impl Into<String>) -> Self {
        Self::PreconditionMissing {
            header: header.into(),
        }
    }

    /// Create an unexpected-status error from the raw response body
    pub fn unexpected_status(status: u16, expected: u16, body: &[u8]) -> Self {
        Self::UnexpectedStatus {
            status,
            expected,
            error: ServerError::from_body(body),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened in the transport (connect, timeout, cancel)
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout { .. })
    }

    /// Whether the failure came from decoding a response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::JsonParse(_) | Error::Decode { .. })
    }

    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for the collections client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
