//! Shared fixtures: in-memory backends wired into the use cases, plus
//! embedding providers that misbehave on purpose.

use async_trait::async_trait;
use scb_application::use_cases::{
    CatalogServiceImpl, IndexingOptions, IndexingServiceImpl, SearchOptions, SearchServiceImpl,
};
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::{EmbeddingProvider, VectorIndexProvider};
use scb_domain::value_objects::Embedding;
use scb_providers::embedding::NullEmbeddingProvider;
use scb_providers::service_store::InMemoryServiceStoreProvider;
use scb_providers::vector_index::InMemoryVectorIndexProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Use cases over shared in-memory backends
pub struct Harness {
    pub index: Arc<InMemoryVectorIndexProvider>,
    pub store: Arc<InMemoryServiceStoreProvider>,
    pub indexing: IndexingServiceImpl,
    pub search: SearchServiceImpl,
    pub catalog: CatalogServiceImpl,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with(
            Arc::new(NullEmbeddingProvider::new()),
            IndexingOptions::default(),
            SearchOptions::default(),
        )
        .await
    }

    pub async fn with_embedding(embedding: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with(embedding, IndexingOptions::default(), SearchOptions::default()).await
    }

    pub async fn with(
        embedding: Arc<dyn EmbeddingProvider>,
        indexing_options: IndexingOptions,
        search_options: SearchOptions,
    ) -> Self {
        let index = Arc::new(InMemoryVectorIndexProvider::new());
        index
            .ensure_collection(embedding.dimensions())
            .await
            .expect("create collection");
        let store = Arc::new(InMemoryServiceStoreProvider::new());

        Self {
            indexing: IndexingServiceImpl::with_options(
                Arc::clone(&embedding),
                index.clone(),
                store.clone(),
                indexing_options,
            ),
            search: SearchServiceImpl::with_options(
                embedding,
                index.clone(),
                store.clone(),
                search_options,
            ),
            catalog: CatalogServiceImpl::new(store.clone()),
            index,
            store,
        }
    }

    pub async fn point_count(&self) -> usize {
        self.index.count().await.expect("count")
    }
}

/// `{id:"svc1", capabilities:{"GET /x":"fetch x"}, endpoints:{"GET /x":"http://h/x"}}`
pub fn svc1() -> ServiceDescriptor {
    ServiceDescriptor::new("svc1", "Service One").with_capability("GET /x", "fetch x", "http://h/x")
}

pub fn petstore() -> ServiceDescriptor {
    ServiceDescriptor::new("petstore", "Petstore")
        .with_description("Pets and orders")
        .with_capability("GET /pets", "list all pets in the store", "http://pets/pets")
        .with_capability("POST /pets", "create a new pet", "http://pets/pets")
        .with_capability("DELETE /orders/{id}", "cancel an order", "http://pets/orders/{id}")
}

/// Null embeddings, except the Nth call (1-based) fails
pub struct FlakyEmbeddingProvider {
    inner: NullEmbeddingProvider,
    fail_on_call: usize,
    calls: AtomicUsize,
}

impl FlakyEmbeddingProvider {
    pub fn failing_on_call(fail_on_call: usize) -> Self {
        Self {
            inner: NullEmbeddingProvider::new(),
            fail_on_call,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FlakyEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on_call {
            return Err(Error::embedding("backend unreachable"));
        }
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "flaky"
    }
}

/// Null embeddings delivered after a fixed delay
pub struct SlowEmbeddingProvider {
    inner: NullEmbeddingProvider,
    delay: Duration,
}

impl SlowEmbeddingProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: NullEmbeddingProvider::new(),
            delay,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for SlowEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        tokio::time::sleep(self.delay).await;
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "slow"
    }
}

/// Declares one dimension more than it actually returns
pub struct MisreportingEmbeddingProvider {
    inner: NullEmbeddingProvider,
}

impl MisreportingEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            inner: NullEmbeddingProvider::with_dimensions(8),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for MisreportingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions() + 1
    }

    fn provider_name(&self) -> &str {
        "misreporting"
    }
}

/// Null embeddings that record how many calls overlap
pub struct TrackingEmbeddingProvider {
    inner: NullEmbeddingProvider,
    delay: Duration,
    blocking: bool,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl TrackingEmbeddingProvider {
    /// Each call awaits a timer for `delay`
    pub fn sleeping(delay: Duration) -> Self {
        Self::new(delay, false)
    }

    /// Each call blocks its thread for `delay`, like CPU-bound inference
    pub fn blocking(delay: Duration) -> Self {
        Self::new(delay, true)
    }

    fn new(delay: Duration, blocking: bool) -> Self {
        Self {
            inner: NullEmbeddingProvider::new(),
            delay,
            blocking,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Most calls ever observed running at once
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for TrackingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);
        if self.blocking {
            std::thread::sleep(self.delay);
        } else {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "tracking"
    }
}
