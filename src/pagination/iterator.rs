//! Continuation-token list iterator

use super::types::{Page, PageIterator, PaginationState};
use crate::error::{Error, Result};
use crate::resource::{ResourceClient, ResourceRequest};
use crate::types::{ResourceType, Verb, CONTINUATION_HEADER};
use async_trait::async_trait;
use futures::stream::{self, Stream};
use reqwest::StatusCode;
use std::marker::PhantomData;
use tracing::debug;

/// Where a LIST call goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub path: String,
    pub resource_type: ResourceType,
    pub resource_link: String,
}

impl ListRequest {
    pub fn new(
        path: impl Into<String>,
        resource_type: ResourceType,
        resource_link: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            resource_type,
            resource_link: resource_link.into(),
        }
    }
}

/// Pages through a resource listing using server continuation tokens
///
/// Starts active with no token. Each successful `next` stores the token from
/// the response; once the server stops sending one the iterator is
/// exhausted and every further `next` returns `Ok(None)` without a request.
/// Calls must not overlap; `&mut self` enforces that.
pub struct ListIterator<C, P> {
    client: C,
    request: ListRequest,
    state: PaginationState,
    _page: PhantomData<fn() -> P>,
}

impl<C: ResourceClient, P: Page> ListIterator<C, P> {
    /// Start a listing from the first page
    pub fn new(client: C, request: ListRequest) -> Self {
        Self::with_state(client, request, PaginationState::new())
    }

    /// Resume a listing from a previously saved continuation token
    pub fn resume_from(client: C, request: ListRequest, continuation: impl Into<String>) -> Self {
        Self::with_state(client, request, PaginationState::with_continuation(continuation))
    }

    fn with_state(client: C, request: ListRequest, state: PaginationState) -> Self {
        Self {
            client,
            request,
            state,
            _page: PhantomData,
        }
    }

    /// Token the next request will carry
    pub fn continuation(&self) -> Option<&str> {
        self.state.continuation.as_deref()
    }

    /// Whether the server has signalled the last page
    pub fn is_exhausted(&self) -> bool {
        self.state.is_done()
    }

    /// Current cursor state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Drive the listing to completion, concatenating every page
    pub async fn collect_all(mut self) -> Result<P> {
        super::aggregate::collect_pages(&mut self).await
    }

    /// Yield pages as a stream; the stream ends after exhaustion or after
    /// the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<P>> + Send {
        stream::try_unfold(self, |mut iter| async move {
            let page = iter.next().await?;
            Ok::<_, Error>(page.map(|page| (page, iter)))
        })
    }
}

#[async_trait]
impl<C: ResourceClient, P: Page> PageIterator for ListIterator<C, P> {
    type Page = P;

    async fn next(&mut self) -> Result<Option<P>> {
        if self.state.is_done() {
            return Ok(None);
        }

        let mut request = ResourceRequest::new(
            Verb::List,
            self.request.path.as_str(),
            self.request.resource_type,
            self.request.resource_link.as_str(),
            StatusCode::OK,
        );
        if let Some(token) = &self.state.continuation {
            request = request.header(CONTINUATION_HEADER, token.as_str());
        }

        // State only changes after the page decoded, so a failed or
        // cancelled call can simply be repeated.
        let response = self.client.execute(request).await?;
        let page: P = response.json()?;
        let next = response.continuation()?.map(str::to_string);

        self.state.advance(next, page.count());
        debug!(
            "{}: page {} ({} items), exhausted={}",
            self.request.path,
            self.state.pages_fetched,
            page.count(),
            self.state.is_done()
        );

        Ok(Some(page))
    }
}
