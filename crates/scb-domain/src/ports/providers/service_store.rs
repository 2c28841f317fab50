use crate::entities::ServiceDescriptor;
use crate::error::Result;
use async_trait::async_trait;

/// Canonical Service Store Interface
///
/// Document store holding the authoritative [`ServiceDescriptor`] of every
/// catalogued service, keyed by its id. Single-document operations are
/// atomic; nothing spans documents.
///
/// # Example
///
/// ```ignore
/// use scb_domain::ports::providers::ServiceStoreProvider;
///
/// store.put(&descriptor).await?;
/// let found = store.get("petstore").await?;
/// assert!(store.delete("petstore").await?);
/// ```
#[async_trait]
pub trait ServiceStoreProvider: Send + Sync {
    /// Point lookup by service id
    async fn get(&self, id: &str) -> Result<Option<ServiceDescriptor>>;

    /// Create or replace the record keyed by `descriptor.id`
    async fn put(&self, descriptor: &ServiceDescriptor) -> Result<()>;

    /// Remove a record, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Every stored record, in no particular order
    async fn list(&self) -> Result<Vec<ServiceDescriptor>>;

    /// Identifier of the provider implementation (e.g. "memory", "filesystem")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.get("__health_check__").await?;
        Ok(())
    }
}
