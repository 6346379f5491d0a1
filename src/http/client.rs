//! HTTP client for the resource protocol
//!
//! Sends a [`ResourceRequest`] to the account endpoint and hands back the raw
//! status, headers and body. Status interpretation happens one layer up in
//! [`ResourceClient`](crate::resource::ResourceClient).

use crate::auth::{AuthConfig, Authenticator, SigningContext};
use crate::error::{Error, Result};
use crate::resource::{ResourceRequest, ResourceResponse, Transport};
use crate::types::{DATE_HEADER, DEFAULT_API_VERSION, VERSION_HEADER};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Account endpoint, e.g. `https://account.documents.azure.com/`
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Service API version sent as `x-ms-version`
    pub api_version: String,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://localhost:8081/".to_string(),
            timeout: Duration::from_secs(30),
            api_version: DEFAULT_API_VERSION.to_string(),
            default_headers: HashMap::new(),
            user_agent: format!("cosmos-collections/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the account endpoint
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the service API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Format a timestamp the way `x-ms-date` expects (RFC 1123, GMT)
pub fn rfc1123_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// HTTP client speaking the resource protocol
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    endpoint: Url,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client without authorization
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a client with authorization
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = parse_endpoint(&config.endpoint)?;

        Ok(Self {
            client,
            config,
            endpoint,
            authenticator: Authenticator::new(auth_config),
        })
    }

    /// The client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build the full URL for a resource path
    pub fn build_url(&self, path: &str) -> Result<Url> {
        Ok(self.endpoint.join(path.trim_start_matches('/'))?)
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            #[allow(clippy::cast_possible_truncation)]
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &ResourceRequest) -> Result<ResourceResponse> {
        let url = self.build_url(&request.path)?;
        let date = rfc1123_date(Utc::now());

        let mut req = self
            .client
            .request(request.verb.method(), url.clone())
            .header(ACCEPT, "application/json")
            .header(VERSION_HEADER, self.config.api_version.as_str())
            .header(DATE_HEADER, date.as_str());

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add request-specific headers
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let context = SigningContext {
            verb: request.verb,
            resource_type: request.resource_type,
            resource_link: &request.resource_link,
            date: &date,
        };
        req = self.authenticator.apply(req, &context)?;

        let response = req.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.verb.method(),
            url,
            status.as_u16(),
            body.len()
        );

        Ok(ResourceResponse::new(status, headers, body.to_vec()))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .finish_non_exhaustive()
    }
}

/// Parse the endpoint, forcing a trailing slash so `join` appends paths
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(Error::missing_field("endpoint"));
    }
    let mut url = Url::parse(endpoint)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
