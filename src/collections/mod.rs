//! Collection management
//!
//! CRUD over `dbs/{db}/colls`, paged listing and partition key range lookup.

mod client;

pub use client::{CollectionClient, CollectionIterator, PartitionKeyRangeIterator};
