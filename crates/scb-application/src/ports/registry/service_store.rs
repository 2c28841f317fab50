//! Service Store Provider Registry
//!
//! Auto-registration system for canonical service store providers using
//! linkme distributed slices.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::providers::ServiceStoreProvider;

/// Configuration for service store provider creation
#[derive(Debug, Clone, Default)]
pub struct ServiceStoreProviderConfig {
    /// Provider name (e.g., "memory", "filesystem")
    pub provider: String,
    /// Storage directory for file-backed stores
    pub path: Option<PathBuf>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ServiceStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the storage directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Registry entry for service store providers
pub struct ServiceStoreProviderEntry {
    /// Unique provider name (e.g., "memory", "filesystem")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ServiceStoreProviderConfig) -> Result<Arc<dyn ServiceStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static SERVICE_STORE_PROVIDERS: [ServiceStoreProviderEntry] = [..];

/// Resolve service store provider by name from registry
pub fn resolve_service_store_provider(
    config: &ServiceStoreProviderConfig,
) -> Result<Arc<dyn ServiceStoreProvider>, String> {
    let provider_name = &config.provider;

    for entry in SERVICE_STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = SERVICE_STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown service store provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered service store providers as (name, description) tuples
pub fn list_service_store_providers() -> Vec<(&'static str, &'static str)> {
    SERVICE_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
