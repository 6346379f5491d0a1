//! CLI module
//!
//! Command-line interface for managing collections.
//!
//! # Commands
//!
//! - `list` - Page through the collections of a database
//! - `get` - Read one collection
//! - `create` - Create a collection from a JSON definition
//! - `replace` - Replace a collection definition
//! - `delete` - Delete a collection (conditional on its etag)
//! - `pkranges` - Show the partition key ranges of a collection

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
