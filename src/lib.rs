// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # cosmos-collections
//!
//! A typed client for the collection-management API of Cosmos DB style
//! document databases.
//!
//! ## Features
//!
//! - **Typed models**: Collections, indexing / partitioning / unique-key /
//!   conflict-resolution policies and partition key ranges with wire-exact JSON
//! - **Collection CRUD**: create, get, replace and etag-guarded delete
//! - **Continuation paging**: restartable iterators, a stream adapter and a
//!   collect-everything aggregator
//! - **Pluggable transport and auth**: reqwest by default, any [`resource::Transport`]
//!   in tests; resource tokens, AAD tokens or a custom [`auth::RequestSigner`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cosmos_collections::{ClientConfig, CosmosClient, PageIterator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("cosmos.yaml")?.with_env();
//!     let client = CosmosClient::from_config(&config)?;
//!     let colls = client.collections("app");
//!
//!     // One page at a time
//!     let mut pages = colls.list();
//!     while let Some(page) = pages.next().await? {
//!         for coll in &page.collections {
//!             println!("{}", coll.id);
//!         }
//!     }
//!
//!     // Or everything at once
//!     let all = colls.list_all().await?;
//!     println!("{} collections", all.count);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CollectionClient   create / get / replace / delete / list   │
//! └───────────────┬──────────────────────────────┬───────────────┘
//!                 │                              │
//!        ┌────────┴────────┐           ┌─────────┴─────────┐
//!        │ ResourceClient  │◄──────────│   ListIterator    │
//!        │ status + decode │           │ x-ms-continuation │
//!        └────────┬────────┘           └───────────────────┘
//!                 │
//!        ┌────────┴────────┐
//!        │    Transport    │  HttpClient (reqwest) + Authenticator
//!        └─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and header names
pub mod types;

/// Resource models
pub mod models;

/// Authorization
pub mod auth;

/// Resource access contract
pub mod resource;

/// HTTP transport
pub mod http;

/// Continuation-token pagination
pub mod pagination;

/// Collection management
pub mod collections;

/// Account-level client
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::CosmosClient;
pub use collections::{CollectionClient, CollectionIterator};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::*;
pub use pagination::{collect_pages, ListIterator, Page, PageIterator};
pub use resource::{ResourceClient, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
