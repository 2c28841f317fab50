//! In-memory service store provider
//!
//! Canonical descriptors held in a concurrent map. Non-persistent.

use async_trait::async_trait;
use dashmap::DashMap;
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::ServiceStoreProvider;
use std::sync::Arc;

/// In-memory service store provider
#[derive(Clone, Default)]
pub struct InMemoryServiceStoreProvider {
    services: Arc<DashMap<String, ServiceDescriptor>>,
}

impl InMemoryServiceStoreProvider {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored descriptors
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[async_trait]
impl ServiceStoreProvider for InMemoryServiceStoreProvider {
    async fn get(&self, id: &str) -> Result<Option<ServiceDescriptor>> {
        Ok(self.services.get(id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, descriptor: &ServiceDescriptor) -> Result<()> {
        if descriptor.id.is_empty() {
            return Err(Error::invalid_argument("Missing 'id' field"));
        }
        self.services
            .insert(descriptor.id.clone(), descriptor.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.services.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<ServiceDescriptor>> {
        Ok(self
            .services
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    SERVICE_STORE_PROVIDERS, ServiceStoreProviderConfig, ServiceStoreProviderEntry,
};

fn in_memory_service_store_factory(
    _config: &ServiceStoreProviderConfig,
) -> std::result::Result<Arc<dyn ServiceStoreProvider>, String> {
    Ok(Arc::new(InMemoryServiceStoreProvider::new()))
}

#[linkme::distributed_slice(SERVICE_STORE_PROVIDERS)]
static MEMORY_PROVIDER: ServiceStoreProviderEntry = ServiceStoreProviderEntry {
    name: "memory",
    description: "In-memory service store (non-persistent)",
    factory: in_memory_service_store_factory,
};
