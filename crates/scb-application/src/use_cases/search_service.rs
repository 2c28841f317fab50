//! Search Service Use Case
//!
//! Embeds a query, takes the nearest capability points from the vector
//! index, and rebuilds a view of each hit from the canonical store. Hits
//! that cannot be resolved are dropped with a log line; they never fail
//! the whole search.

use crate::ports::providers::{EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider};
use crate::ports::services::{SearchRequest, SearchServiceInterface};
use scb_domain::constants::{
    EMBEDDING_QUERY_PREFIX, INDEXING_EMBED_TIMEOUT_SECS, SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT,
};
use scb_domain::error::{Error, Result};
use scb_domain::value_objects::{SearchHit, ServiceView, ViewMode};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning knobs of the retrieval pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Limit used when a request asks for 0 hits
    pub default_limit: usize,
    /// Requests above this limit are clamped
    pub max_limit: usize,
    /// Text prepended to the query before embedding
    pub query_prefix: String,
    /// Deadline for embedding the query
    pub embed_timeout: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            max_limit: SEARCH_MAX_LIMIT,
            query_prefix: EMBEDDING_QUERY_PREFIX.to_string(),
            embed_timeout: Duration::from_secs(INDEXING_EMBED_TIMEOUT_SECS),
        }
    }
}

impl SearchOptions {
    /// Effective hit limit for a requested one
    pub fn effective_limit(&self, requested: usize) -> usize {
        let limit = if requested == 0 {
            self.default_limit
        } else {
            requested
        };
        limit.min(self.max_limit)
    }
}

/// Search service implementation
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndexProvider>,
    service_store: Arc<dyn ServiceStoreProvider>,
    options: SearchOptions,
}

impl SearchServiceImpl {
    /// Create new search service with default options
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        service_store: Arc<dyn ServiceStoreProvider>,
    ) -> Self {
        Self::with_options(
            embedding_provider,
            vector_index,
            service_store,
            SearchOptions::default(),
        )
    }

    /// Create new search service with explicit options
    pub fn with_options(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        service_store: Arc<dyn ServiceStoreProvider>,
        options: SearchOptions,
    ) -> Self {
        Self {
            embedding_provider,
            vector_index,
            service_store,
            options,
        }
    }

    /// Options in effect
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Resolve one hit against the canonical store
    async fn resolve(&self, hit: &SearchHit, mode: ViewMode) -> Option<ServiceView> {
        let service_id = &hit.payload.service_id;
        let operation = &hit.payload.operation_key;

        let service = match self.service_store.get(service_id).await {
            Ok(Some(service)) => service,
            Ok(None) => {
                warn!(
                    service_id = %service_id,
                    point_id = %hit.point_id,
                    "Skipping hit: service no longer in canonical store"
                );
                return None;
            }
            Err(e) => {
                warn!(service_id = %service_id, error = %e, "Skipping hit: canonical lookup failed");
                return None;
            }
        };

        match mode {
            ViewMode::Service => Some(ServiceView::full(&service, Some(operation), hit.score)),
            ViewMode::Capability => match ServiceView::scoped(&service, operation, hit.score) {
                Ok(view) => Some(view),
                Err(reason) => {
                    warn!(
                        service_id = %service_id,
                        operation_key = %operation,
                        reason = %reason,
                        "Skipping hit: record drifted since indexing"
                    );
                    None
                }
            },
        }
    }
}

#[async_trait::async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search_with(&self, request: &SearchRequest) -> Result<Vec<ServiceView>> {
        if request.query.trim().is_empty() {
            return Err(Error::invalid_argument("Missing 'query' field"));
        }

        let limit = self.options.effective_limit(request.limit);
        let input = format!("{}{}", self.options.query_prefix, request.query);
        let query = tokio::time::timeout(
            self.options.embed_timeout,
            self.embedding_provider.embed(&input),
        )
        .await
        .map_err(|_| {
            Error::embedding(format!(
                "Embedding the query timed out after {:?}",
                self.options.embed_timeout
            ))
        })??;

        let hits = self.vector_index.search(&query.vector, limit).await?;
        debug!(hits = hits.len(), limit, mode = %request.mode, "Vector search complete");

        let mut views = Vec::with_capacity(hits.len());
        let mut seen_services = HashSet::new();
        for hit in &hits {
            if request.mode == ViewMode::Service && seen_services.contains(&hit.payload.service_id)
            {
                continue;
            }
            if let Some(view) = self.resolve(hit, request.mode).await {
                seen_services.insert(view.service_id.clone());
                views.push(view);
            }
        }

        Ok(views)
    }
}
