//! Catalog bootstrap - composition root
//!
//! Resolves the three providers named in [`AppConfig`] from the linkme
//! registries, brings up the embedding model, prepares the vector
//! collection and wires the use cases behind one [`Catalog`] facade.
//!
//! ```text
//! AppConfig → registries (linkme) → providers → use cases → Catalog
//!                                       ↓
//!                              ModelReadiness / health
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = init_catalog(ConfigLoader::new().load()?).await?;
//!
//! catalog.index_service(&descriptor).await?;
//! let views = catalog.search("list all pets", 0).await?;
//! let report = catalog.health().await;
//! ```

use crate::config::AppConfig;
use crate::constants::HEALTH_CHECK_TIMEOUT_SECS;
use crate::health::checkers::{
    EmbeddingHealthChecker, ServiceStoreHealthChecker, VectorIndexHealthChecker,
};
use crate::health::{HealthRegistry, HealthResponse};
use scb_application::ports::providers::{
    EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider,
};
use scb_application::ports::registry::{
    resolve_embedding_provider, resolve_service_store_provider, resolve_vector_index_provider,
};
use scb_application::ports::services::{
    CatalogServiceInterface, IndexingReceipt, IndexingServiceInterface, SearchRequest,
    SearchServiceInterface,
};
use scb_application::readiness::{ModelReadiness, ReadinessState};
use scb_application::use_cases::{CatalogServiceImpl, IndexingServiceImpl, SearchServiceImpl};
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::{Error, Result};
use scb_domain::value_objects::ServiceView;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

// Force linkme registration of all providers
extern crate scb_providers;

/// Service Capability Browser facade
///
/// Owns the resolved providers and the use cases built on them. Cheap to
/// share behind an `Arc`; every operation takes `&self`.
pub struct Catalog {
    config: Arc<AppConfig>,

    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndexProvider>,
    service_store: Arc<dyn ServiceStoreProvider>,
    readiness: Arc<ModelReadiness>,

    indexing: Arc<dyn IndexingServiceInterface>,
    search: Arc<dyn SearchServiceInterface>,
    catalog: Arc<dyn CatalogServiceInterface>,
    health: HealthRegistry,
}

impl Catalog {
    /// Assemble a catalog from already-built providers
    ///
    /// Brings up the embedding model (readiness `Loading` then `Ready` or
    /// `Failed`) and creates the vector collection at the model's
    /// dimension. A model that fails to come up does not abort
    /// construction; it is reported through [`Catalog::health`].
    pub async fn from_providers(
        config: AppConfig,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        service_store: Arc<dyn ServiceStoreProvider>,
    ) -> Result<Self> {
        let config = Arc::new(config);
        let readiness = Arc::new(ModelReadiness::new());

        readiness.begin_loading()?;
        match embedding_provider.health_check().await {
            Ok(()) => readiness.mark_ready()?,
            Err(e) => {
                warn!(
                    provider = embedding_provider.provider_name(),
                    error = %e,
                    "Embedding model failed to come up"
                );
                readiness.mark_failed(e.to_string())?;
            }
        }

        vector_index
            .ensure_collection(embedding_provider.dimensions())
            .await?;

        let indexing: Arc<dyn IndexingServiceInterface> =
            Arc::new(IndexingServiceImpl::with_options(
                Arc::clone(&embedding_provider),
                Arc::clone(&vector_index),
                Arc::clone(&service_store),
                config.indexing_options(),
            ));
        let search: Arc<dyn SearchServiceInterface> = Arc::new(SearchServiceImpl::with_options(
            Arc::clone(&embedding_provider),
            Arc::clone(&vector_index),
            Arc::clone(&service_store),
            config.search_options(),
        ));
        let catalog: Arc<dyn CatalogServiceInterface> =
            Arc::new(CatalogServiceImpl::new(Arc::clone(&service_store)));

        let health = HealthRegistry::new()
            .register(Arc::new(EmbeddingHealthChecker::new(
                Arc::clone(&embedding_provider),
                Arc::clone(&readiness),
            )))
            .register(Arc::new(VectorIndexHealthChecker::new(Arc::clone(
                &vector_index,
            ))))
            .register(Arc::new(ServiceStoreHealthChecker::new(Arc::clone(
                &service_store,
            ))));

        info!(
            embedding = embedding_provider.provider_name(),
            dimensions = embedding_provider.dimensions(),
            vector_index = vector_index.provider_name(),
            service_store = service_store.provider_name(),
            readiness = %readiness.state(),
            "Catalog initialized"
        );

        Ok(Self {
            config,
            embedding_provider,
            vector_index,
            service_store,
            readiness,
            indexing,
            search,
            catalog,
            health,
        })
    }

    // ========================================================================
    // Exposed operations
    // ========================================================================

    /// Index (or re-index) one service descriptor
    pub async fn index_service(&self, service: &ServiceDescriptor) -> Result<IndexingReceipt> {
        self.indexing.index_service(service).await
    }

    /// Remove a service's canonical record
    pub async fn delete_service(&self, id: &str) -> Result<()> {
        self.indexing.delete_service(id).await
    }

    /// Search with the configured view mode (`limit` 0 uses the configured default)
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<ServiceView>> {
        let request = SearchRequest::new(query)
            .with_limit(limit)
            .with_mode(self.config.search.mode);
        self.search.search_with(&request).await
    }

    /// Search with an explicit request
    pub async fn search_with(&self, request: &SearchRequest) -> Result<Vec<ServiceView>> {
        self.search.search_with(request).await
    }

    /// Canonical record of one service
    pub async fn get_service(&self, id: &str) -> Result<ServiceDescriptor> {
        self.catalog.get_service(id).await
    }

    /// Every canonical record, ordered by id
    pub async fn list_services(&self) -> Result<Vec<ServiceDescriptor>> {
        self.catalog.list_services().await
    }

    // ========================================================================
    // Observability
    // ========================================================================

    /// Health of the three components plus model readiness
    pub async fn health(&self) -> HealthResponse {
        let mut response = self
            .health
            .perform_health_checks(Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS))
            .await;
        response.system.model_readiness = self.readiness.state();
        response
    }

    /// Current embedding model readiness
    pub fn readiness(&self) -> ReadinessState {
        self.readiness.state()
    }

    /// Shared readiness cell
    pub fn model_readiness(&self) -> Arc<ModelReadiness> {
        Arc::clone(&self.readiness)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Effective configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Embedding provider in use
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Vector index in use
    pub fn vector_index(&self) -> Arc<dyn VectorIndexProvider> {
        Arc::clone(&self.vector_index)
    }

    /// Canonical service store in use
    pub fn service_store(&self) -> Arc<dyn ServiceStoreProvider> {
        Arc::clone(&self.service_store)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("embedding", &self.embedding_provider.provider_name())
            .field("vector_index", &self.vector_index.provider_name())
            .field("service_store", &self.service_store.provider_name())
            .field("readiness", &self.readiness.state())
            .finish_non_exhaustive()
    }
}

/// Resolve the configured providers and build a [`Catalog`]
///
/// Providers are auto-registered via linkme distributed slices when
/// scb-providers is linked. No explicit registration call is needed.
pub async fn init_catalog(config: AppConfig) -> Result<Catalog> {
    info!("Initializing catalog");

    let providers = &config.providers;
    let embedding_config = providers
        .embedding
        .to_registry_config()
        .with_workers(config.indexing.workers);
    let embedding_provider = resolve_embedding_provider(&embedding_config)
        .map_err(|e| Error::configuration(format!("Embedding: {e}")))?;
    let vector_index = resolve_vector_index_provider(&providers.vector_index.to_registry_config())
        .map_err(|e| Error::configuration(format!("VectorIndex: {e}")))?;
    let service_store =
        resolve_service_store_provider(&providers.service_store.to_registry_config())
            .map_err(|e| Error::configuration(format!("ServiceStore: {e}")))?;

    info!(
        "Resolved providers: embedding={}, vector_index={}, service_store={}",
        embedding_provider.provider_name(),
        vector_index.provider_name(),
        service_store.provider_name()
    );

    Catalog::from_providers(config, embedding_provider, vector_index, service_store).await
}
