//! Catalog Service Use Case
//!
//! Direct reads of canonical service records.

use crate::ports::providers::ServiceStoreProvider;
use crate::ports::services::CatalogServiceInterface;
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::{Error, Result};
use std::sync::Arc;

/// Catalog service implementation
pub struct CatalogServiceImpl {
    service_store: Arc<dyn ServiceStoreProvider>,
}

impl CatalogServiceImpl {
    /// Create new catalog service
    pub fn new(service_store: Arc<dyn ServiceStoreProvider>) -> Self {
        Self { service_store }
    }
}

#[async_trait::async_trait]
impl CatalogServiceInterface for CatalogServiceImpl {
    async fn get_service(&self, id: &str) -> Result<ServiceDescriptor> {
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("Missing service id"));
        }
        self.service_store
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("service '{id}'")))
    }

    async fn list_services(&self) -> Result<Vec<ServiceDescriptor>> {
        let mut services = self.service_store.list().await?;
        services.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(services)
    }
}
