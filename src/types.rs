//! Common types used throughout the client
//!
//! Shared aliases, the logical request verbs, resource type names and the
//! wire header names of the resource protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Header Names
// ============================================================================

/// Continuation token header (request and response)
pub const CONTINUATION_HEADER: &str = "x-ms-continuation";

/// Optimistic-concurrency precondition header
pub const IF_MATCH_HEADER: &str = "If-Match";

/// Request date header used by request signing
pub const DATE_HEADER: &str = "x-ms-date";

/// Service API version header
pub const VERSION_HEADER: &str = "x-ms-version";

/// Default service API version
pub const DEFAULT_API_VERSION: &str = "2018-12-31";

// ============================================================================
// Verbs
// ============================================================================

/// Logical operation performed against a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Create,
    Read,
    List,
    Delete,
    Replace,
}

impl Verb {
    /// HTTP method used on the wire for this verb.
    ///
    /// Replace goes out as POST, the same as Create.
    pub fn method(self) -> reqwest::Method {
        match self {
            Verb::Create | Verb::Replace => reqwest::Method::POST,
            Verb::Read | Verb::List => reqwest::Method::GET,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        verb.method()
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Create => "CREATE",
            Verb::Read => "READ",
            Verb::List => "LIST",
            Verb::Delete => "DELETE",
            Verb::Replace => "REPLACE",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Resource Types
// ============================================================================

/// Resource type segment used for request authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Dbs,
    Colls,
    Pkranges,
}

impl ResourceType {
    /// Wire name of the resource type
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Dbs => "dbs",
            ResourceType::Colls => "colls",
            ResourceType::Pkranges => "pkranges",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
