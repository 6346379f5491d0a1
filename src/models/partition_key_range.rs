//! Partition key ranges of a collection

use super::enums::PartitionKeyRangeStatus;
use super::{is_zero, null_as_default};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// One slice of the partition key space, owned by a physical partition
///
/// Fields this client does not model are kept in `extra` and written back on
/// serialization, so a range fetched from a newer service survives a
/// decode/encode cycle intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionKeyRange {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    #[serde(
        rename = "_rid",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_id: String,

    #[serde(
        rename = "_ts",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub timestamp: i64,

    #[serde(
        rename = "_self",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub self_link: String,

    #[serde(
        rename = "_etag",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub etag: String,

    /// Exclusive upper bound of the effective partition key
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub max_exclusive: String,

    /// Inclusive lower bound of the effective partition key
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub min_inclusive: String,

    #[serde(
        rename = "ridPrefix",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub resource_id_prefix: i64,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub throughput_fraction: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PartitionKeyRangeStatus>,

    /// Ranges this one was split from
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    /// Log sequence number
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub lsn: i64,

    /// Unrecognised fields, re-emitted verbatim
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl PartitionKeyRange {
    /// Look up a field the model does not know about
    pub fn extra_field(&self, name: &str) -> Option<&JsonValue> {
        self.extra.get(name)
    }

    /// Whether the range came from splitting another range
    pub fn is_split_child(&self) -> bool {
        !self.parents.is_empty()
    }

    /// Whether `effective_key` falls inside `[min_inclusive, max_exclusive)`
    ///
    /// Effective partition keys are upper-case hex strings, so plain string
    /// ordering matches key ordering. An empty `max_exclusive` never occurs on
    /// the wire (the last range ends at `"FF"`) and is treated as unbounded.
    pub fn contains(&self, effective_key: &str) -> bool {
        effective_key >= self.min_inclusive.as_str()
            && (self.max_exclusive.is_empty() || effective_key < self.max_exclusive.as_str())
    }
}

/// Partition key ranges of one collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionKeyRanges {
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
        rename = "PartitionKeyRanges",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub partition_key_ranges: Vec<PartitionKeyRange>,
}

impl PartitionKeyRanges {
    /// Find the range owning an effective partition key
    pub fn find(&self, effective_key: &str) -> Option<&PartitionKeyRange> {
        self.partition_key_ranges
            .iter()
            .find(|range| range.contains(effective_key))
    }
}
