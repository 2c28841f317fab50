//! Embedding Provider Registry
//!
//! Auto-registration system for embedding providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::providers::EmbeddingProvider;

/// Configuration for embedding provider creation
///
/// Contains all configuration options that an embedding provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (e.g., "null", "ollama", "fastembed")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Embedding dimensions (if configurable)
    pub dimensions: Option<usize>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Parallel inference workers, for local providers
    pub workers: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl EmbeddingProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set the number of inference workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for embedding providers
///
/// Each embedding provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create provider instances.
pub struct EmbeddingProviderEntry {
    /// Unique provider name (e.g., "null", "ollama")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Resolve embedding provider by name from registry
///
/// # Example
///
/// ```ignore
/// let config = EmbeddingProviderConfig::new("ollama")
///     .with_base_url("http://localhost:11434")
///     .with_model("nomic-embed-text");
/// let provider = resolve_embedding_provider(&config)?;
/// ```
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    let provider_name = &config.provider;

    for entry in EMBEDDING_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown embedding provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered embedding providers as (name, description) tuples
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
