//! Resource models
//!
//! Typed projections of the JSON bodies exchanged with the service. Field
//! names on the wire are fixed by the service; empty values are omitted on
//! serialization.

mod collection;
mod enums;
mod partition_key_range;

pub use collection::{
    Collection, Collections, CompositeIndex, CompositePath, ConflictResolutionPolicy,
    ExcludedPath, GeospatialConfig, IncludedPath, Index, IndexingPolicy, PartitionKey,
    UniqueKey, UniqueKeyPolicy,
};
pub use enums::{
    ConflictResolutionMode, GeospatialType, IndexDataType, IndexKind, IndexingMode, Order,
    PartitionKeyKind, PartitionKeyRangeStatus,
};
pub use partition_key_range::{PartitionKeyRange, PartitionKeyRanges};

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the field's empty value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
