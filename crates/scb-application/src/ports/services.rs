//! Application Service Interfaces
//!
//! Contracts the use cases implement. Outer layers (CLI, HTTP front doors)
//! depend on these traits rather than on the concrete services.

use async_trait::async_trait;
use scb_domain::constants::SEARCH_DEFAULT_LIMIT;
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::Result;
use scb_domain::value_objects::{ServiceView, ViewMode};
use serde::{Deserialize, Serialize};

/// Outcome of indexing one service descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingReceipt {
    /// Id of the indexed service
    pub service_id: String,
    /// Number of vector points written
    pub points_upserted: usize,
    /// Ids of the written points, sorted
    pub point_ids: Vec<String>,
}

/// Parameters of a capability search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Natural-language description of the wanted capability
    pub query: String,
    /// Number of hits requested from the vector index (0 selects the default)
    #[serde(default)]
    pub limit: usize,
    /// Shape of each returned view
    #[serde(default)]
    pub mode: ViewMode,
}

impl SearchRequest {
    /// Request with the default limit and capability-scoped views
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: SEARCH_DEFAULT_LIMIT,
            mode: ViewMode::default(),
        }
    }

    /// Set the hit limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the view mode
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Indexing pipeline: descriptor in, vector points and canonical record out
#[async_trait]
pub trait IndexingServiceInterface: Send + Sync {
    /// Embed every capability of `service`, upsert the points, then store
    /// the descriptor
    async fn index_service(&self, service: &ServiceDescriptor) -> Result<IndexingReceipt>;

    /// Remove the canonical record of a service
    async fn delete_service(&self, id: &str) -> Result<()>;
}

/// Retrieval pipeline: query in, ranked service views out
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Search with an explicit limit and capability-scoped views
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ServiceView>> {
        self.search_with(&SearchRequest::new(query).with_limit(limit))
            .await
    }

    /// Search with full control over limit and view mode
    async fn search_with(&self, request: &SearchRequest) -> Result<Vec<ServiceView>>;
}

/// Direct access to canonical records
#[async_trait]
pub trait CatalogServiceInterface: Send + Sync {
    /// Fetch one descriptor by id
    async fn get_service(&self, id: &str) -> Result<ServiceDescriptor>;

    /// Every stored descriptor, ordered by id
    async fn list_services(&self) -> Result<Vec<ServiceDescriptor>>;
}
