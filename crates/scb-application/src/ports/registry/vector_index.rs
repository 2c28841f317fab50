//! Vector Index Provider Registry
//!
//! Auto-registration system for vector index providers using linkme distributed slices.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use scb_domain::constants::VECTOR_COLLECTION_DEFAULT;

use crate::ports::providers::VectorIndexProvider;

/// Configuration for vector index provider creation
#[derive(Debug, Clone)]
pub struct VectorIndexProviderConfig {
    /// Provider name (e.g., "memory", "filesystem", "null")
    pub provider: String,
    /// Collection the provider is bound to
    pub collection: String,
    /// Storage directory for file-backed indexes
    pub path: Option<PathBuf>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl Default for VectorIndexProviderConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
            collection: VECTOR_COLLECTION_DEFAULT.to_string(),
            path: None,
            extra: HashMap::new(),
        }
    }
}

impl VectorIndexProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the storage directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Registry entry for vector index providers
pub struct VectorIndexProviderEntry {
    /// Unique provider name (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&VectorIndexProviderConfig) -> Result<Arc<dyn VectorIndexProvider>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_INDEX_PROVIDERS: [VectorIndexProviderEntry] = [..];

/// Resolve vector index provider by name from registry
pub fn resolve_vector_index_provider(
    config: &VectorIndexProviderConfig,
) -> Result<Arc<dyn VectorIndexProvider>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_INDEX_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_INDEX_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector index provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered vector index providers as (name, description) tuples
pub fn list_vector_index_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_INDEX_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
