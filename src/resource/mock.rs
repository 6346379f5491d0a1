//! In-memory transport for unit tests

use super::{ResourceRequest, ResourceResponse, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses and records every request it sees
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ResourceResponse>>>,
    requests: Mutex<Vec<ResourceRequest>>,
    hang: bool,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A transport whose requests never complete
    pub(crate) fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub(crate) fn push_json(&self, status: u16, body: Value, headers: &[(&str, &str)]) {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        let response = ResourceResponse::new(
            StatusCode::from_u16(status).unwrap(),
            map,
            serde_json::to_vec(&body).unwrap(),
        );
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        let response = ResourceResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        );
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_response(&self, response: ResourceResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_error(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ResourceRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ResourceRequest) -> Result<ResourceResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.hang {
            futures::future::pending::<()>().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no response queued".to_string())))
    }
}
