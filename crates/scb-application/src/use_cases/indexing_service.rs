//! Indexing Service Use Case
//!
//! Turns one service descriptor into vector points plus a canonical record.
//! Every capability is embedded on its own runtime task, at most `workers`
//! at a time; the batch is only written once all embeddings have succeeded.

use crate::domain_services::{derive_point_id, extract_capabilities};
use crate::ports::providers::{EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider};
use crate::ports::services::{IndexingReceipt, IndexingServiceInterface};
use scb_domain::constants::{
    EMBEDDING_QUERY_PREFIX, INDEXING_DEFAULT_WORKERS, INDEXING_EMBED_TIMEOUT_SECS,
};
use scb_domain::entities::{CapabilityEntry, ServiceDescriptor};
use scb_domain::error::{Error, Result};
use scb_domain::value_objects::{PointPayload, VectorPoint};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Tuning knobs of the indexing pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingOptions {
    /// Maximum number of embedding tasks in flight (1 is sequential)
    pub workers: usize,
    /// Deadline for each embedding task
    pub embed_timeout: Duration,
    /// Text prepended to every capability before embedding
    pub query_prefix: String,
}

impl Default for IndexingOptions {
    fn default() -> Self {
        Self {
            workers: INDEXING_DEFAULT_WORKERS,
            embed_timeout: Duration::from_secs(INDEXING_EMBED_TIMEOUT_SECS),
            query_prefix: EMBEDDING_QUERY_PREFIX.to_string(),
        }
    }
}

impl IndexingOptions {
    /// Set the worker budget
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the per-task embedding deadline
    pub fn with_embed_timeout(mut self, embed_timeout: Duration) -> Self {
        self.embed_timeout = embed_timeout;
        self
    }

    /// Set the embedding prefix
    pub fn with_query_prefix(mut self, query_prefix: impl Into<String>) -> Self {
        self.query_prefix = query_prefix.into();
        self
    }
}

/// Indexing service implementation
pub struct IndexingServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndexProvider>,
    service_store: Arc<dyn ServiceStoreProvider>,
    options: IndexingOptions,
}

impl IndexingServiceImpl {
    /// Create new indexing service with default options
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        service_store: Arc<dyn ServiceStoreProvider>,
    ) -> Self {
        Self::with_options(
            embedding_provider,
            vector_index,
            service_store,
            IndexingOptions::default(),
        )
    }

    /// Create new indexing service with explicit options
    pub fn with_options(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        service_store: Arc<dyn ServiceStoreProvider>,
        options: IndexingOptions,
    ) -> Self {
        Self {
            embedding_provider,
            vector_index,
            service_store,
            options,
        }
    }

    /// Options in effect
    pub fn options(&self) -> &IndexingOptions {
        &self.options
    }

    /// Embed every entry on at most `workers` runtime tasks
    ///
    /// The first failure aborts the tasks still in flight and fails the
    /// whole batch.
    async fn embed_all(&self, entries: Vec<CapabilityEntry>) -> Result<Vec<VectorPoint>> {
        let workers = self.options.workers.max(1);
        let prefix: Arc<str> = Arc::from(self.options.query_prefix.as_str());
        let mut pending = entries.into_iter();
        let mut points = Vec::with_capacity(pending.len());
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < workers {
                let Some(entry) = pending.next() else {
                    break;
                };
                tasks.spawn(embed_entry(
                    Arc::clone(&self.embedding_provider),
                    Arc::clone(&prefix),
                    self.options.embed_timeout,
                    entry,
                ));
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            let outcome = joined
                .map_err(|e| Error::internal(format!("Embedding task failed: {e}")))
                .and_then(|result| result);
            match outcome {
                Ok(point) => points.push(point),
                Err(e) => {
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        Ok(points)
    }
}

/// Embed one capability and build its vector point
async fn embed_entry(
    embedding_provider: Arc<dyn EmbeddingProvider>,
    prefix: Arc<str>,
    embed_timeout: Duration,
    entry: CapabilityEntry,
) -> Result<VectorPoint> {
    let input = format!("{prefix}{}", entry.text);

    let embedding = tokio::time::timeout(embed_timeout, embedding_provider.embed(&input))
        .await
        .map_err(|_| {
            Error::embedding(format!(
                "Embedding '{}' of service '{}' timed out after {:?}",
                entry.operation_key, entry.service_id, embed_timeout
            ))
        })?
        .map_err(|e| match e {
            Error::Embedding { .. } => e,
            other => Error::embedding(format!(
                "Embedding '{}' of service '{}' failed: {}",
                entry.operation_key, entry.service_id, other
            )),
        })?;

    let expected = embedding_provider.dimensions();
    if embedding.vector.len() != expected {
        return Err(Error::embedding(format!(
            "Embedding for '{}' has {} dimensions, expected {}",
            entry.operation_key,
            embedding.vector.len(),
            expected
        )));
    }

    debug!(
        service_id = %entry.service_id,
        operation_key = %entry.operation_key,
        "Embedded capability"
    );

    Ok(VectorPoint::new(
        derive_point_id(&entry.text),
        embedding.vector,
        PointPayload::new(entry.service_id, entry.operation_key),
    ))
}

#[async_trait::async_trait]
impl IndexingServiceInterface for IndexingServiceImpl {
    async fn index_service(&self, service: &ServiceDescriptor) -> Result<IndexingReceipt> {
        service.validate()?;

        let entries = extract_capabilities(service);
        info!(
            service_id = %service.id,
            capabilities = entries.len(),
            workers = self.options.workers,
            "Indexing service"
        );

        let points = match self.embed_all(entries).await {
            Ok(points) => points,
            Err(e) => {
                warn!(service_id = %service.id, error = %e, "Embedding batch failed, nothing written");
                return Err(e);
            }
        };

        if !points.is_empty() {
            self.vector_index.upsert(&points).await?;
        }
        self.service_store.put(service).await?;

        let mut point_ids: Vec<String> = points.into_iter().map(|p| p.id).collect();
        point_ids.sort();
        point_ids.dedup();

        info!(
            service_id = %service.id,
            points = point_ids.len(),
            "Service indexed"
        );

        Ok(IndexingReceipt {
            service_id: service.id.clone(),
            points_upserted: point_ids.len(),
            point_ids,
        })
    }

    async fn delete_service(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("Missing service id"));
        }
        if !self.service_store.delete(id).await? {
            return Err(Error::not_found(format!("service '{id}'")));
        }
        // Vector points of the service are left in place; retrieval skips them.
        info!(service_id = %id, "Service deleted from canonical store");
        Ok(())
    }
}
