//! Authorization configuration types

use crate::error::Result;
use crate::types::{ResourceType, Verb};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Everything a signer needs to authorize one request
#[derive(Debug, Clone, Copy)]
pub struct SigningContext<'a> {
    pub verb: Verb,
    pub resource_type: ResourceType,
    /// Resource link the token must grant access to
    pub resource_link: &'a str,
    /// Value sent in the `x-ms-date` header
    pub date: &'a str,
}

/// Produces the `Authorization` header value for a request
///
/// The returned value is sent as-is; implementations are responsible for
/// URL-encoding it.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, context: &SigningContext<'_>) -> Result<String>;
}

/// Authorization configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authorization header (emulators behind a proxy, tests)
    #[default]
    None,

    /// Pre-signed resource token, e.g. `type=resource&ver=1.0&sig=...`
    ResourceToken {
        /// Token as issued by the service
        token: String,
    },

    /// AAD access token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Static headers added to every request
    CustomHeaders {
        /// Header name to value
        headers: HashMap<String, String>,
    },

    /// Externally implemented signer
    Signer(Arc<dyn RequestSigner>),
}

impl AuthConfig {
    /// Resource token authorization
    pub fn resource_token(token: impl Into<String>) -> Self {
        Self::ResourceToken {
            token: token.into(),
        }
    }

    /// AAD bearer authorization
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Authorization through a custom signer
    pub fn signer(signer: impl RequestSigner + 'static) -> Self {
        Self::Signer(Arc::new(signer))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::ResourceToken { .. } => f.write_str("ResourceToken { token: <redacted> }"),
            AuthConfig::Bearer { .. } => f.write_str("Bearer { token: <redacted> }"),
            AuthConfig::CustomHeaders { headers } => f
                .debug_struct("CustomHeaders")
                .field("headers", &headers.keys().collect::<Vec<_>>())
                .finish(),
            AuthConfig::Signer(_) => f.write_str("Signer(..)"),
        }
    }
}
