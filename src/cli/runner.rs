//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::CosmosClient;
use crate::collections::CollectionClient;
use crate::config::{AuthDefinition, ClientConfig};
use crate::error::{Error, Result, ResultExt};
use crate::models::Collection;
use crate::pagination::PageIterator;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = CosmosClient::from_config(&config)?;
        let colls = client.collections(config.require_database()?);

        match &self.cli.command {
            Commands::List {
                all,
                max_pages,
                continuation,
            } => {
                self.list(&colls, *all, *max_pages, continuation.as_deref())
                    .await
            }
            Commands::Get { id } => self.emit(&colls.get(id).await?),
            Commands::Create { file } => {
                let definition = read_collection(file)?;
                self.emit(&colls.create(&definition).await?)
            }
            Commands::Replace { file } => {
                let definition = read_collection(file)?;
                if definition.id.is_empty() {
                    return Err(Error::config("replace requires a collection id"));
                }
                self.emit(&colls.replace(&definition).await?)
            }
            Commands::Delete { id, etag } => self.delete(&colls, id, etag.as_deref()).await,
            Commands::Pkranges { id } => self.emit(&colls.partition_key_ranges(id).await?),
        }
    }

    /// Build configuration: file, then environment, then flags
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };
        Ok(self.apply_flags(config.with_env()))
    }

    fn apply_flags(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(database) = &self.cli.database {
            config.database = Some(database.clone());
        }
        if let Some(token) = &self.cli.token {
            config.auth = AuthDefinition::ResourceToken {
                token: token.clone(),
            };
        }
        config
    }

    async fn list(
        &self,
        colls: &CollectionClient,
        all: bool,
        max_pages: Option<u64>,
        continuation: Option<&str>,
    ) -> Result<()> {
        let mut iter = match continuation {
            Some(token) => colls.list_from(token),
            None => colls.list(),
        };

        if all {
            return self.emit(&iter.collect_all().await?);
        }

        let mut pages = 0u64;
        while let Some(page) = iter.next().await? {
            self.emit(&page)?;
            pages += 1;
            if max_pages.is_some_and(|max| pages >= max) {
                break;
            }
        }

        if let Some(token) = iter.continuation() {
            info!("More pages available, resume with --continuation '{token}'");
        }
        Ok(())
    }

    async fn delete(&self, colls: &CollectionClient, id: &str, etag: Option<&str>) -> Result<()> {
        let collection = match etag {
            Some(etag) => Collection {
                etag: etag.to_string(),
                ..Collection::new(id)
            },
            None => colls.get(id).await?,
        };
        colls.delete(&collection).await?;
        self.emit(&serde_json::json!({"deleted": id}))
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let out = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{out}");
        Ok(())
    }
}

fn read_collection(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid collection in {}", path.display()))
}
