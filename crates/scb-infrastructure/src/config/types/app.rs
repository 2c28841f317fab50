//! Main application configuration

use super::{IndexingConfig, LoggingConfig, ProvidersConfig, SearchConfig};
use scb_application::use_cases::{IndexingOptions, SearchOptions};
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// ```toml
/// [providers.embedding]
/// provider = "ollama"
/// model = "nomic-embed-text"
///
/// [providers.vector_index]
/// provider = "filesystem"
/// path = "/var/lib/scb/vectors"
///
/// [indexing]
/// workers = 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend selection for the three ports
    pub providers: ProvidersConfig,
    /// Indexing pipeline tuning
    pub indexing: IndexingConfig,
    /// Retrieval pipeline tuning
    pub search: SearchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Options for the indexing pipeline
    pub fn indexing_options(&self) -> IndexingOptions {
        IndexingOptions::default()
            .with_workers(self.indexing.workers)
            .with_embed_timeout(self.indexing.embed_timeout())
            .with_query_prefix(self.providers.embedding.query_prefix.clone())
    }

    /// Options for the retrieval pipeline
    ///
    /// Uses the same embedding prefix and deadline as indexing so queries
    /// and capabilities land in the same space.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            default_limit: self.search.default_limit,
            max_limit: self.search.max_limit,
            query_prefix: self.providers.embedding.query_prefix.clone(),
            embed_timeout: self.indexing.embed_timeout(),
        }
    }
}
