//! Client configuration
//!
//! Loaded from YAML (or built in code) and turned into an
//! [`HttpClientConfig`] plus an [`AuthConfig`].
//!
//! ```yaml
//! endpoint: https://account.documents.azure.com/
//! database: app
//! timeout_secs: 10
//! auth:
//!   type: resource_token
//!   token: "type=resource&ver=1.0&sig=..."
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::DEFAULT_API_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "COSMOS_ENDPOINT";
/// Environment variable overriding the database
pub const ENV_DATABASE: &str = "COSMOS_DATABASE";
/// Environment variable supplying a resource token
pub const ENV_RESOURCE_TOKEN: &str = "COSMOS_RESOURCE_TOKEN";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account endpoint
    #[serde(default)]
    pub endpoint: String,

    /// Default database for collection operations
    #[serde(default)]
    pub database: Option<String>,

    /// Service API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers added to every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Authorization
    #[serde(default)]
    pub auth: AuthDefinition,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            database: None,
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: HashMap::new(),
            auth: AuthDefinition::default(),
        }
    }
}

/// Authorization as written in a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthDefinition {
    #[default]
    None,
    ResourceToken {
        token: String,
    },
    Bearer {
        token: String,
    },
    Headers {
        headers: HashMap<String, String>,
    },
}

impl ClientConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Apply `COSMOS_*` environment overrides
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production)
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(database) = lookup(ENV_DATABASE).filter(|v| !v.is_empty()) {
            self.database = Some(database);
        }
        if let Some(token) = lookup(ENV_RESOURCE_TOKEN).filter(|v| !v.is_empty()) {
            self.auth = AuthDefinition::ResourceToken { token };
        }
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::missing_field("endpoint"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        match &self.auth {
            AuthDefinition::ResourceToken { token } | AuthDefinition::Bearer { token }
                if token.is_empty() =>
            {
                Err(Error::missing_field("auth.token"))
            }
            _ => Ok(()),
        }
    }

    /// Database id, or an error when none is configured
    pub fn require_database(&self) -> Result<&str> {
        self.database
            .as_deref()
            .filter(|db| !db.is_empty())
            .ok_or_else(|| Error::missing_field("database"))
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .endpoint(self.endpoint.as_str())
            .api_version(self.api_version.as_str())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        for (key, value) in &self.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder.build()
    }

    /// Authorization derived from this config
    pub fn auth_config(&self) -> AuthConfig {
        match &self.auth {
            AuthDefinition::None => AuthConfig::None,
            AuthDefinition::ResourceToken { token } => AuthConfig::resource_token(token.as_str()),
            AuthDefinition::Bearer { token } => AuthConfig::bearer(token.as_str()),
            AuthDefinition::Headers { headers } => AuthConfig::CustomHeaders {
                headers: headers.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
endpoint: https://account.documents.azure.com/
database: app
api_version: "2020-07-15"
timeout_secs: 10
user_agent: my-service/2.0
headers:
  x-ms-consistency-level: Session
auth:
  type: resource_token
  token: "type=resource&ver=1.0&sig=abc"
"#;

        let config = ClientConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.endpoint, "https://account.documents.azure.com/");
        assert_eq!(config.require_database().unwrap(), "app");
        assert_eq!(config.api_version, "2020-07-15");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(
            config.auth,
            AuthDefinition::ResourceToken {
                token: "type=resource&ver=1.0&sig=abc".to_string()
            }
        );
        config.validate().unwrap();

        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(10));
        assert_eq!(http.user_agent, "my-service/2.0");
        assert_eq!(
            http.default_headers.get("x-ms-consistency-level"),
            Some(&"Session".to_string())
        );
        assert!(matches!(
            config.auth_config(),
            AuthConfig::ResourceToken { .. }
        ));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_yaml_str("endpoint: https://localhost:8081/").unwrap();

        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.auth, AuthDefinition::None);
        assert!(config.database.is_none());
        assert!(matches!(
            config.require_database(),
            Err(Error::MissingConfigField { .. })
        ));
    }

    #[test]
    fn test_validate() {
        let config = ClientConfig::default();
        assert!(matches!(
            config.validate(),
            Err(Error::MissingConfigField { .. })
        ));

        let config = ClientConfig {
            endpoint: "https://localhost:8081/".to_string(),
            auth: AuthDefinition::Bearer {
                token: String::new(),
            },
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            endpoint: "https://localhost:8081/".to_string(),
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_yaml_str("endpoint: https://a/\ndatabase: one").unwrap();

        let config = config.with_overrides(|key| match key {
            ENV_ENDPOINT => Some("https://b/".to_string()),
            ENV_RESOURCE_TOKEN => Some("tok".to_string()),
            ENV_DATABASE => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.endpoint, "https://b/");
        assert_eq!(config.database.as_deref(), Some("one"));
        assert_eq!(
            config.auth,
            AuthDefinition::ResourceToken {
                token: "tok".to_string()
            }
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: https://localhost:8081/").unwrap();
        writeln!(file, "auth:\n  type: bearer\n  token: aad-token").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();

        assert!(matches!(config.auth_config(), AuthConfig::Bearer { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ClientConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientConfig::from_yaml_str("auth: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }
}
