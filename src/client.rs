//! Account-level client

use crate::auth::AuthConfig;
use crate::collections::CollectionClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::resource::Transport;
use std::sync::Arc;

/// Entry point bound to one account endpoint
///
/// Holds the shared transport and hands out per-resource clients.
#[derive(Clone)]
pub struct CosmosClient {
    transport: Arc<dyn Transport>,
}

impl CosmosClient {
    /// Create a client over HTTP
    pub fn new(config: HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        let transport = HttpClient::with_auth(config, auth)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client from a validated [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.http_config(), config.auth_config())
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Collections of the given database
    pub fn collections(&self, database_id: impl Into<String>) -> CollectionClient {
        CollectionClient::new(Arc::clone(&self.transport), database_id)
    }
}

impl std::fmt::Debug for CosmosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosClient").finish_non_exhaustive()
    }
}
