//! Authenticator implementation
//!
//! Applies the configured authorization to outgoing requests.

use super::types::{AuthConfig, SigningContext};
use crate::error::Result;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// URL-encode an authorization string for the `Authorization` header
pub fn encode_authorization(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Authenticator handles applying authorization to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The underlying configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authorization to a request builder
    pub fn apply(
        &self,
        req: RequestBuilder,
        context: &SigningContext<'_>,
    ) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::ResourceToken { token } => {
                Ok(req.header(AUTHORIZATION, encode_authorization(token)))
            }

            AuthConfig::Bearer { token } => {
                let raw = format!("type=aad&ver=1.0&sig={token}");
                Ok(req.header(AUTHORIZATION, encode_authorization(&raw)))
            }

            AuthConfig::CustomHeaders { headers } => {
                let mut req = req;
                for (key, value) in headers {
                    req = req.header(key.as_str(), value.as_str());
                }
                Ok(req)
            }

            AuthConfig::Signer(signer) => {
                let value = signer.sign(context)?;
                Ok(req.header(AUTHORIZATION, value))
            }
        }
    }
}
