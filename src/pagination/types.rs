//! Pagination types and traits
//!
//! Defines the page abstraction shared by every listable resource and the
//! cursor state an iterator carries between pages.

use crate::error::Result;
use crate::models::{Collection, Collections, PartitionKeyRange, PartitionKeyRanges};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A page envelope returned by a LIST call
pub trait Page: DeserializeOwned + Default + Send {
    /// Entity contained in the page
    type Item;

    /// Server-reported number of entities in this page
    fn count(&self) -> u64;

    /// Resource id of the listed parent
    fn resource_id(&self) -> &str;

    /// Entities in arrival order
    fn items(&self) -> &[Self::Item];

    /// Fold another page into this one: counts add up, entities append in
    /// order and a non-empty resource id replaces the current one.
    fn append(&mut self, page: Self);
}

impl Page for Collections {
    type Item = Collection;

    fn count(&self) -> u64 {
        self.count
    }

    fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn items(&self) -> &[Collection] {
        &self.collections
    }

    fn append(&mut self, page: Self) {
        self.count += page.count;
        if !page.resource_id.is_empty() {
            self.resource_id = page.resource_id;
        }
        self.collections.extend(page.collections);
    }
}

impl Page for PartitionKeyRanges {
    type Item = PartitionKeyRange;

    fn count(&self) -> u64 {
        self.count
    }

    fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn items(&self) -> &[PartitionKeyRange] {
        &self.partition_key_ranges
    }

    fn append(&mut self, page: Self) {
        self.count += page.count;
        if !page.resource_id.is_empty() {
            self.resource_id = page.resource_id;
        }
        self.partition_key_ranges.extend(page.partition_key_ranges);
    }
}

/// Source of pages, consumed one call at a time
///
/// `next` returns `Ok(None)` once the listing is exhausted, and keeps doing
/// so on every later call. An error leaves the cursor where it was.
#[async_trait]
pub trait PageIterator: Send {
    type Page: Page;

    async fn next(&mut self) -> Result<Option<Self::Page>>;
}

/// Cursor state carried between pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Token to send with the next request
    pub continuation: Option<String>,
    /// Pages received so far
    pub pages_fetched: u64,
    /// Entities received so far (sum of page counts)
    pub total_fetched: u64,
    /// No further pages exist
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state resuming from a saved continuation token
    pub fn with_continuation(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            continuation: (!token.is_empty()).then_some(token),
            ..Self::default()
        }
    }

    /// Record a received page and the token that came with it.
    ///
    /// A missing or empty token means the listing is exhausted.
    pub fn advance(&mut self, next: Option<String>, count: u64) {
        self.pages_fetched += 1;
        self.total_fetched += count;
        self.continuation = next.filter(|token| !token.is_empty());
        if self.continuation.is_none() {
            self.mark_done();
        }
    }

    /// Mark pagination as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Check if pagination is done
    pub fn is_done(&self) -> bool {
        self.done
    }
}
