//! The resource capability traits

use super::types::{ResourceRequest, ResourceResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Sends one request and returns whatever the server answered
///
/// Implementations perform no status interpretation and no retries. A
/// transport that is dropped mid-request must abandon the exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ResourceRequest) -> Result<ResourceResponse>;
}

/// Typed request/response capability shared by all resource families
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Transport used for every call
    fn transport(&self) -> &dyn Transport;

    /// Execute a request, accepting only its expected status
    ///
    /// Any other status becomes [`Error::UnexpectedStatus`] carrying the
    /// decoded server error body.
    async fn execute(&self, request: ResourceRequest) -> Result<ResourceResponse> {
        debug!(
            "{} {} ({}, link={})",
            request.verb, request.path, request.resource_type, request.resource_link
        );

        let response = self.transport().send(&request).await?;

        if response.status != request.expected_status {
            warn!(
                "{} {} returned {}, expected {}",
                request.verb,
                request.path,
                response.status.as_u16(),
                request.expected_status.as_u16()
            );
            return Err(Error::unexpected_status(
                response.status.as_u16(),
                request.expected_status.as_u16(),
                &response.body,
            ));
        }

        Ok(response)
    }
}
