//! Collection client

use crate::error::{Error, Result};
use crate::models::{Collection, Collections, PartitionKeyRanges};
use crate::pagination::{ListIterator, ListRequest};
use crate::resource::{ResourceClient, ResourceRequest, Transport};
use crate::types::{ResourceType, Verb, IF_MATCH_HEADER};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::info;

/// Pages through the collections of a database
pub type CollectionIterator = ListIterator<CollectionClient, Collections>;

/// Pages through the partition key ranges of a collection
pub type PartitionKeyRangeIterator = ListIterator<CollectionClient, PartitionKeyRanges>;

/// Client for the collections of one database
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct CollectionClient {
    transport: Arc<dyn Transport>,
    database_id: String,
    path: String,
}

impl ResourceClient for CollectionClient {
    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl CollectionClient {
    /// Create a client for the database `database_id`
    pub fn new(transport: Arc<dyn Transport>, database_id: impl Into<String>) -> Self {
        let database_id = database_id.into();
        let path = format!("dbs/{database_id}");
        Self {
            transport,
            database_id,
            path,
        }
    }

    /// Database id this client is bound to
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Database path (`dbs/{db}`)
    pub fn database_path(&self) -> &str {
        &self.path
    }

    fn colls_path(&self) -> String {
        format!("{}/colls", self.path)
    }

    fn coll_path(&self, id: &str) -> String {
        format!("{}/colls/{id}", self.path)
    }

    /// Create a collection; the service answers `201 Created`
    pub async fn create(&self, collection: &Collection) -> Result<Collection> {
        let request = ResourceRequest::new(
            Verb::Create,
            self.colls_path(),
            ResourceType::Colls,
            self.path.as_str(),
            StatusCode::CREATED,
        )
        .json(serde_json::to_value(collection)?);

        let created: Collection = self.execute(request).await?.json()?;
        info!("Created collection {}/{}", self.database_id, created.id);
        Ok(created)
    }

    /// Read a collection by id
    pub async fn get(&self, id: &str) -> Result<Collection> {
        let path = self.coll_path(id);
        let request = ResourceRequest::new(
            Verb::Read,
            path.as_str(),
            ResourceType::Colls,
            path.as_str(),
            StatusCode::OK,
        );

        self.execute(request).await?.json()
    }

    /// Delete a collection, conditional on its etag
    ///
    /// Fails with [`Error::PreconditionMissing`] without touching the network
    /// when `collection` carries no etag.
    pub async fn delete(&self, collection: &Collection) -> Result<()> {
        if !collection.has_etag() {
            return Err(Error::precondition_missing(IF_MATCH_HEADER));
        }

        let path = self.coll_path(&collection.id);
        let request = ResourceRequest::new(
            Verb::Delete,
            path.as_str(),
            ResourceType::Colls,
            path.as_str(),
            StatusCode::NO_CONTENT,
        )
        .header(IF_MATCH_HEADER, collection.etag.as_str());

        self.execute(request).await?;
        info!("Deleted collection {}/{}", self.database_id, collection.id);
        Ok(())
    }

    /// Replace a collection definition
    ///
    /// Sent as POST to the collection path and expects `201 Created`, the
    /// same exchange as create.
    pub async fn replace(&self, collection: &Collection) -> Result<Collection> {
        let path = self.coll_path(&collection.id);
        let request = ResourceRequest::new(
            Verb::Replace,
            path.as_str(),
            ResourceType::Colls,
            path.as_str(),
            StatusCode::CREATED,
        )
        .json(serde_json::to_value(collection)?);

        self.execute(request).await?.json()
    }

    /// Start a paged listing of the database's collections
    pub fn list(&self) -> CollectionIterator {
        ListIterator::new(self.clone(), self.list_request())
    }

    /// Resume a paged listing from a saved continuation token
    pub fn list_from(&self, continuation: impl Into<String>) -> CollectionIterator {
        ListIterator::resume_from(self.clone(), self.list_request(), continuation)
    }

    /// List every collection, following continuation tokens to the end
    pub async fn list_all(&self) -> Result<Collections> {
        self.list().collect_all().await
    }

    fn list_request(&self) -> ListRequest {
        ListRequest::new(self.colls_path(), ResourceType::Colls, self.path.as_str())
    }

    /// Fetch the partition key ranges of a collection
    pub async fn partition_key_ranges(&self, id: &str) -> Result<PartitionKeyRanges> {
        let request = ResourceRequest::new(
            Verb::Read,
            format!("{}/pkranges", self.coll_path(id)),
            ResourceType::Pkranges,
            self.coll_path(id),
            StatusCode::OK,
        );

        self.execute(request).await?.json()
    }

    /// Page through the partition key ranges of a collection
    pub fn partition_key_range_pages(&self, id: &str) -> PartitionKeyRangeIterator {
        let request = ListRequest::new(
            format!("{}/pkranges", self.coll_path(id)),
            ResourceType::Pkranges,
            self.coll_path(id),
        );
        ListIterator::new(self.clone(), request)
    }
}

impl std::fmt::Debug for CollectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionClient")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
