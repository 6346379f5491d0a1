//! Pagination module
//!
//! Listing calls return one page at a time plus an opaque continuation token
//! in the `x-ms-continuation` response header. [`ListIterator`] replays that
//! token on the next request until the server stops sending one;
//! [`collect_pages`] folds a whole listing into a single page value.

mod aggregate;
mod iterator;
mod types;

pub use aggregate::collect_pages;
pub use iterator::{ListIterator, ListRequest};
pub use types::{Page, PageIterator, PaginationState};
