//! Request and response values exchanged with a transport

use crate::error::{Error, Result};
use crate::types::{JsonValue, ResourceType, Verb, CONTINUATION_HEADER};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// One logical operation against a resource path
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    /// Logical verb, mapped to an HTTP method by the transport
    pub verb: Verb,
    /// Path below the account endpoint (e.g. `dbs/app/colls`)
    pub path: String,
    /// Resource type used for authorization
    pub resource_type: ResourceType,
    /// Resource link used for authorization
    pub resource_link: String,
    /// The only status treated as success
    pub expected_status: StatusCode,
    /// JSON request body
    pub body: Option<JsonValue>,
    /// Extra request headers
    pub headers: HashMap<String, String>,
}

impl ResourceRequest {
    /// Create a request with no body and no extra headers
    pub fn new(
        verb: Verb,
        path: impl Into<String>,
        resource_type: ResourceType,
        resource_link: impl Into<String>,
        expected_status: StatusCode,
    ) -> Self {
        Self {
            verb,
            path: path.into(),
            resource_type,
            resource_link: resource_link.into(),
            expected_status,
            body: None,
            headers: HashMap::new(),
        }
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Raw outcome of a transport exchange
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResourceResponse {
    /// Build a response from parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Continuation token for the next page, if the server sent a non-empty one.
    ///
    /// A header that is present but not visible ASCII is a decode failure,
    /// never the end of the listing.
    pub fn continuation(&self) -> Result<Option<&str>> {
        let Some(value) = self.headers.get(CONTINUATION_HEADER) else {
            return Ok(None);
        };
        let token = value
            .to_str()
            .map_err(|_| Error::decode(format!("invalid {CONTINUATION_HEADER} header")))?;
        Ok(Some(token).filter(|token| !token.is_empty()))
    }

    /// Concurrency token of the returned resource
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }
}
