//! Collection resource and its embedded policies

use super::enums::{
    ConflictResolutionMode, GeospatialType, IndexDataType, IndexKind, IndexingMode, Order,
    PartitionKeyKind,
};
use super::{is_false, is_zero, null_as_default};
use serde::{Deserialize, Serialize};

// ============================================================================
// Collection
// ============================================================================

/// A named container of documents
///
/// System properties (`_rid`, `_ts`, `_self`, `_etag` and the child resource
/// links) are assigned by the service and are empty on a collection built
/// locally for `create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// User-assigned identifier, immutable once created
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Service-assigned resource id
    #[serde(
        rename = "_rid",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_id: String,

    /// Last modification time (epoch seconds)
    #[serde(
        rename = "_ts",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub timestamp: i64,

    /// Self link
    #[serde(
        rename = "_self",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub self_link: String,

    /// Concurrency token, changes on every successful mutation
    #[serde(
        rename = "_etag",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub etag: String,

    #[serde(
        rename = "_docs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub documents: String,

    #[serde(
        rename = "_sprocs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub stored_procedures: String,

    #[serde(
        rename = "_triggers",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub triggers: String,

    #[serde(
        rename = "_udfs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_defined_functions: String,

    #[serde(
        rename = "_conflicts",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub conflicts: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<IndexingPolicy>,

    /// Partition key definition, immutable once created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<PartitionKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_key_policy: Option<UniqueKeyPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_policy: Option<ConflictResolutionPolicy>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub allow_materialized_views: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geospatial_config: Option<GeospatialConfig>,
}

impl Collection {
    /// Create a bare collection definition with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the partition key definition
    #[must_use]
    pub fn with_partition_key(mut self, partition_key: PartitionKey) -> Self {
        self.partition_key = Some(partition_key);
        self
    }

    /// Set the indexing policy
    #[must_use]
    pub fn with_indexing_policy(mut self, policy: IndexingPolicy) -> Self {
        self.indexing_policy = Some(policy);
        self
    }

    /// Set the unique key policy
    #[must_use]
    pub fn with_unique_keys(mut self, policy: UniqueKeyPolicy) -> Self {
        self.unique_key_policy = Some(policy);
        self
    }

    /// Set the conflict resolution policy
    #[must_use]
    pub fn with_conflict_resolution(mut self, policy: ConflictResolutionPolicy) -> Self {
        self.conflict_resolution_policy = Some(policy);
        self
    }

    /// Set the geospatial configuration
    #[must_use]
    pub fn with_geospatial_config(mut self, config: GeospatialConfig) -> Self {
        self.geospatial_config = Some(config);
        self
    }

    /// Whether the collection carries a concurrency token
    pub fn has_etag(&self) -> bool {
        !self.etag.is_empty()
    }
}

// ============================================================================
// Indexing Policy
// ============================================================================

/// Indexing policy of a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingPolicy {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub automatic: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexing_mode: Option<IndexingMode>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub included_paths: Vec<IncludedPath>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub excluded_paths: Vec<ExcludedPath>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub composite_indexes: Vec<CompositeIndex>,
}

impl IndexingPolicy {
    /// Automatic, consistent indexing with no explicit paths
    pub fn consistent() -> Self {
        Self {
            automatic: true,
            indexing_mode: Some(IndexingMode::Consistent),
            ..Self::default()
        }
    }

    /// Add an included path
    #[must_use]
    pub fn include(mut self, path: IncludedPath) -> Self {
        self.included_paths.push(path);
        self
    }

    /// Add an excluded path
    #[must_use]
    pub fn exclude(mut self, path: impl Into<String>) -> Self {
        self.excluded_paths.push(IncludedPath::new(path));
        self
    }

    /// Add a composite index
    #[must_use]
    pub fn composite(mut self, index: CompositeIndex) -> Self {
        self.composite_indexes.push(index);
        self
    }
}

/// A path specification inside an indexing policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedPath {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Index>,
}

impl IncludedPath {
    /// Path with no explicit indexes
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            indexes: Vec::new(),
        }
    }

    /// Add an index to this path
    #[must_use]
    pub fn with_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }
}

/// Excluded paths share the included-path shape on the wire
pub type ExcludedPath = IncludedPath;

/// Index definition on a path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<IndexDataType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<IndexKind>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub precision: i32,
}

/// One `(path, order)` element of a composite index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositePath {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl CompositePath {
    pub fn ascending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            order: Some(Order::Ascending),
        }
    }

    pub fn descending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            order: Some(Order::Descending),
        }
    }
}

/// Ordered sequence of paths indexed together
pub type CompositeIndex = Vec<CompositePath>;

// ============================================================================
// Partition Key
// ============================================================================

/// Partition key definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionKey {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PartitionKeyKind>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub version: u32,
}

impl PartitionKey {
    /// Hash partitioning over the given paths
    pub fn hash<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            kind: Some(PartitionKeyKind::Hash),
            version: 0,
        }
    }

    /// Set the partition key version (2 enables large keys)
    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

// ============================================================================
// Unique Keys
// ============================================================================

/// Set of uniqueness constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueKeyPolicy {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub unique_keys: Vec<UniqueKey>,
}

impl UniqueKeyPolicy {
    /// Add a unique key made of the given paths
    #[must_use]
    pub fn with_key<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_keys.push(UniqueKey {
            paths: paths.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// Paths whose combined value must be unique across documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueKey {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

// ============================================================================
// Conflict Resolution
// ============================================================================

/// Conflict resolution policy
///
/// `conflict_resolution_path` applies to last-writer-wins,
/// `conflict_resolution_procedure` to custom resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolutionPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ConflictResolutionMode>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub conflict_resolution_path: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub conflict_resolution_procedure: String,
}

impl ConflictResolutionPolicy {
    /// Last writer wins, comparing the value at `path`
    pub fn last_writer_wins(path: impl Into<String>) -> Self {
        Self {
            mode: Some(ConflictResolutionMode::LastWriterWins),
            conflict_resolution_path: path.into(),
            conflict_resolution_procedure: String::new(),
        }
    }

    /// Resolve through the referenced stored procedure
    pub fn custom(procedure: impl Into<String>) -> Self {
        Self {
            mode: Some(ConflictResolutionMode::Custom),
            conflict_resolution_path: String::new(),
            conflict_resolution_procedure: procedure.into(),
        }
    }
}

// ============================================================================
// Geospatial
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeospatialConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GeospatialType>,
}

impl GeospatialConfig {
    pub fn geography() -> Self {
        Self {
            kind: Some(GeospatialType::Geography),
        }
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// One page of a collection listing
///
/// The continuation token for the next page travels in a response header,
/// not in this body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(
        rename = "_count",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub count: u64,

    #[serde(
        rename = "_rid",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_id: String,

    #[serde(
        rename = "DocumentCollections",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collections: Vec<Collection>,
}
