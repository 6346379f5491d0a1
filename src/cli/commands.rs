//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Collection management for Cosmos DB accounts
#[derive(Parser, Debug)]
#[command(name = "cosmos-colls")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Account endpoint (overrides config and COSMOS_ENDPOINT)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Database id (overrides config and COSMOS_DATABASE)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Resource token (overrides config and COSMOS_RESOURCE_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collections, one page per output line
    List {
        /// Fetch every page and print a single merged result
        #[arg(long)]
        all: bool,

        /// Stop after this many pages
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_pages: Option<u64>,

        /// Resume from a continuation token
        #[arg(long)]
        continuation: Option<String>,
    },

    /// Read a collection
    Get {
        /// Collection id
        id: String,
    },

    /// Create a collection from a JSON file
    Create {
        /// Collection definition (JSON)
        #[arg(long)]
        file: PathBuf,
    },

    /// Replace a collection from a JSON file
    Replace {
        /// Collection definition (JSON), must include `id`
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete a collection
    Delete {
        /// Collection id
        id: String,

        /// Etag to match; read from the service when omitted
        #[arg(long)]
        etag: Option<String>,
    },

    /// Show partition key ranges of a collection
    Pkranges {
        /// Collection id
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Indented JSON
    Pretty,
}
