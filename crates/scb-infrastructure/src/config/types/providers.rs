//! Provider selection
//!
//! Each section names a registered adapter plus the settings it needs, and
//! converts into the matching registry config.

use crate::constants::{
    DEFAULT_CONFIG_DIR, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_SERVICE_STORE_PROVIDER,
    DEFAULT_VECTOR_INDEX_PROVIDER, SERVICE_STORE_DIR, VECTOR_INDEX_DIR,
};
use scb_application::ports::registry::{
    EmbeddingProviderConfig, ServiceStoreProviderConfig, VectorIndexProviderConfig,
};
use scb_domain::constants::{EMBEDDING_QUERY_PREFIX, VECTOR_COLLECTION_DEFAULT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory for local provider data (`<data dir>/scb/<name>`)
fn default_data_path(name: &str) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_DIR)
        .join(name)
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name (null, ollama, fastembed)
    pub provider: String,
    /// Model name
    pub model: Option<String>,
    /// Base URL for HTTP providers
    pub base_url: Option<String>,
    /// Output dimensions, for providers that allow choosing
    pub dimensions: Option<usize>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Text prepended to capabilities and queries before embedding
    pub query_prefix: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            dimensions: None,
            timeout_secs: None,
            query_prefix: EMBEDDING_QUERY_PREFIX.to_string(),
        }
    }
}

impl EmbeddingConfig {
    /// Registry config for resolving the provider
    pub fn to_registry_config(&self) -> EmbeddingProviderConfig {
        EmbeddingProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            dimensions: self.dimensions,
            timeout_secs: self.timeout_secs,
            workers: None,
            extra: Default::default(),
        }
    }
}

/// Vector index provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorIndexConfig {
    /// Provider name (memory, filesystem, null)
    pub provider: String,
    /// Collection holding the capability points
    pub collection: String,
    /// Snapshot directory for the filesystem provider
    pub path: Option<PathBuf>,
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_INDEX_PROVIDER.to_string(),
            collection: VECTOR_COLLECTION_DEFAULT.to_string(),
            path: Some(default_data_path(VECTOR_INDEX_DIR)),
        }
    }
}

impl VectorIndexConfig {
    /// Registry config for resolving the provider
    pub fn to_registry_config(&self) -> VectorIndexProviderConfig {
        let config = VectorIndexProviderConfig::new(self.provider.clone())
            .with_collection(self.collection.clone());
        match &self.path {
            Some(path) => config.with_path(path),
            None => config,
        }
    }
}

/// Canonical service store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStoreConfig {
    /// Provider name (memory, filesystem)
    pub provider: String,
    /// Document directory for the filesystem provider
    pub path: Option<PathBuf>,
}

impl Default for ServiceStoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_SERVICE_STORE_PROVIDER.to_string(),
            path: Some(default_data_path(SERVICE_STORE_DIR)),
        }
    }
}

impl ServiceStoreConfig {
    /// Registry config for resolving the provider
    pub fn to_registry_config(&self) -> ServiceStoreProviderConfig {
        let config = ServiceStoreProviderConfig::new(self.provider.clone());
        match &self.path {
            Some(path) => config.with_path(path),
            None => config,
        }
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Embedding provider
    pub embedding: EmbeddingConfig,
    /// Vector index provider
    pub vector_index: VectorIndexConfig,
    /// Canonical service store provider
    pub service_store: ServiceStoreConfig,
}
