//! The `scb` command line
//!
//! Every command prints JSON on stdout (`config` prints TOML). Logs go to
//! stderr. Exit codes follow the error class: 2 for invalid input, 3 for an
//! unknown id, 4 for an unreachable store, 1 for anything else.

use anyhow::Context;
use clap::{Parser, Subcommand};
use scb_application::ports::registry::{
    list_embedding_providers, list_service_store_providers, list_vector_index_providers,
};
use scb_application::ports::services::SearchRequest;
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::Error;
use scb_domain::value_objects::ViewMode;
use scb_infrastructure::bootstrap::{Catalog, init_catalog};
use scb_infrastructure::config::loader::to_toml;
use scb_infrastructure::config::{AppConfig, ConfigLoader};
use serde_json::{Value, json};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Service Capability Browser - find services by what they can do
#[derive(Parser, Debug)]
#[command(name = "scb")]
#[command(about = "Service Capability Browser - semantic search over service capabilities")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity (-v debug, -vv trace); overrides the configured log level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Catalog commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Index service descriptors from a JSON file (object or array, `-` for stdin)
    Index {
        /// Descriptor file
        file: PathBuf,
    },
    /// Find services whose capabilities match a query
    Search {
        /// Natural-language query
        query: String,
        /// Maximum number of results (defaults to `search.default_limit`)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Result view: capability or service (defaults to `search.mode`)
        #[arg(short, long)]
        mode: Option<ViewMode>,
    },
    /// Print the canonical record of one service
    Get {
        /// Service id
        id: String,
    },
    /// Print every canonical record
    List,
    /// Remove a service's canonical record
    Delete {
        /// Service id
        id: String,
    },
    /// Report provider health and model readiness
    Health,
    /// Print the effective configuration as TOML
    Config,
    /// List the registered provider adapters
    Providers,
}

/// Rendered command result
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Printed as pretty JSON
    Json(Value),
    /// Printed verbatim
    Text(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => {
                let rendered = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                write!(f, "{rendered}")
            }
            Self::Text(text) => write!(f, "{}", text.trim_end()),
        }
    }
}

/// Load configuration for a command line invocation
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;

    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
    Ok(config)
}

/// Run one command against the given configuration
pub async fn run(command: &Command, config: AppConfig) -> anyhow::Result<Output> {
    match command {
        Command::Config => Ok(Output::Text(to_toml(&config)?)),
        Command::Providers => Ok(Output::Json(registered_providers())),
        _ => {
            let catalog = init_catalog(config).await?;
            execute(&catalog, command).await
        }
    }
}

/// Run one catalog command
pub async fn execute(catalog: &Catalog, command: &Command) -> anyhow::Result<Output> {
    let value = match command {
        Command::Index { file } => {
            let services = read_descriptors(file)?;
            let mut receipts = Vec::with_capacity(services.len());
            for service in &services {
                let receipt = catalog
                    .index_service(service)
                    .await
                    .with_context(|| format!("Failed to index service '{}'", service.id))?;
                info!(
                    service_id = %receipt.service_id,
                    points = receipt.points_upserted,
                    "Indexed service"
                );
                receipts.push(receipt);
            }
            serde_json::to_value(receipts)?
        }
        Command::Search { query, limit, mode } => {
            let request = SearchRequest::new(query.as_str())
                .with_limit(limit.unwrap_or(0))
                .with_mode(mode.unwrap_or(catalog.config().search.mode));
            serde_json::to_value(catalog.search_with(&request).await?)?
        }
        Command::Get { id } => serde_json::to_value(catalog.get_service(id).await?)?,
        Command::List => serde_json::to_value(catalog.list_services().await?)?,
        Command::Delete { id } => {
            catalog.delete_service(id).await?;
            json!({ "deleted": id })
        }
        Command::Health => serde_json::to_value(catalog.health().await)?,
        Command::Config => return Ok(Output::Text(to_toml(catalog.config())?)),
        Command::Providers => registered_providers(),
    };
    Ok(Output::Json(value))
}

/// Parse a descriptor file holding one JSON object or an array of them
pub fn read_descriptors(path: &Path) -> anyhow::Result<Vec<ServiceDescriptor>> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read descriptors from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    parse_descriptors(&content)
}

/// Parse one JSON descriptor object or an array of them
pub fn parse_descriptors(content: &str) -> anyhow::Result<Vec<ServiceDescriptor>> {
    let value: Value = serde_json::from_str(content).map_err(Error::from)?;
    let services = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ServiceDescriptor>, _>>()
            .map_err(Error::from)?,
        Value::Object(_) => vec![serde_json::from_value(value).map_err(Error::from)?],
        _ => {
            return Err(Error::invalid_argument(
                "Expected a service descriptor object or an array of them",
            )
            .into());
        }
    };
    Ok(services)
}

/// Names and descriptions of every linked provider adapter
pub fn registered_providers() -> Value {
    let entries = |list: Vec<(&'static str, &'static str)>| -> Vec<Value> {
        list.into_iter()
            .map(|(name, description)| json!({ "name": name, "description": description }))
            .collect()
    };
    json!({
        "embedding": entries(list_embedding_providers()),
        "vector_index": entries(list_vector_index_providers()),
        "service_store": entries(list_service_store_providers()),
    })
}

/// Process exit code for a failed command
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_validation() => 2,
        Some(Error::Json { .. }) => 2,
        Some(e) if e.is_not_found() => 3,
        Some(e) if e.is_backend_unavailable() => 4,
        _ => 1,
    }
}
