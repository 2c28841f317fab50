//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for local
//! ONNX inference. The multilingual E5 family is the default, matching the
//! `"query: "` prefix the indexing pipeline prepends.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::EmbeddingProvider;
use scb_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_FASTEMBED_BASE, EMBEDDING_DIMENSION_FASTEMBED_LARGE,
    EMBEDDING_DIMENSION_FASTEMBED_SMALL, FASTEMBED_DEFAULT_MODEL,
};
use crate::embedding::helpers::normalize;

/// Requests buffered ahead of the worker threads
const FASTEMBED_QUEUE_CAPACITY: usize = 100;

/// Messages for the FastEmbed actors
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// FastEmbed local embedding provider using a pool of actors
///
/// Every worker thread owns its own model instance and pulls requests from a
/// shared queue, so concurrent indexing tasks get parallel inference. Each
/// worker holds a full copy of the model in memory.
#[derive(Clone)]
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedMessage>,
    model_name: String,
    dimensions: usize,
    workers: usize,
}

impl FastEmbedProvider {
    /// Create a single-worker provider with the default model
    pub fn new() -> Result<Self> {
        Self::from_name(FASTEMBED_DEFAULT_MODEL, 1)
    }

    /// Create a provider from a model name such as `multilingual-e5-large`
    pub fn from_name(name: &str, workers: usize) -> Result<Self> {
        let (model, dimensions) = parse_embedding_model(name)
            .ok_or_else(|| Error::embedding(format!("Unsupported FastEmbed model '{name}'")))?;
        let init_options = InitOptions::new(model).with_show_download_progress(true);
        Self::with_options(init_options, name.to_string(), dimensions, workers)
    }

    /// Create a provider with custom initialization options
    ///
    /// Loads one model per worker; a `workers` of 0 is treated as 1.
    pub fn with_options(
        init_options: InitOptions,
        model_name: String,
        dimensions: usize,
        workers: usize,
    ) -> Result<Self> {
        let workers = workers.max(1);
        let (tx, rx) = mpsc::channel(FASTEMBED_QUEUE_CAPACITY);
        let receiver = Arc::new(Mutex::new(rx));

        for index in 0..workers {
            let text_embedding = TextEmbedding::try_new(init_options.clone()).map_err(|e| {
                Error::embedding(format!("Failed to initialize FastEmbed model: {e}"))
            })?;
            let actor =
                FastEmbedActor::new(Arc::clone(&receiver), text_embedding, model_name.clone());
            std::thread::Builder::new()
                .name(format!("fastembed-{index}"))
                .spawn(move || actor.run())
                .map_err(|e| Error::embedding(format!("Failed to start FastEmbed worker: {e}")))?;
        }

        tracing::info!(model = %model_name, workers, "FastEmbed model loaded");

        Ok(Self {
            sender: tx,
            model_name,
            dimensions,
            workers,
        })
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model_name
    }

    /// Number of inference threads
    pub fn workers(&self) -> usize {
        self.workers
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(FastEmbedMessage::EmbedBatch {
                texts: texts.to_vec(),
                tx,
            })
            .await
            .map_err(|_| Error::embedding("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::embedding("FastEmbed actor closed")))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

/// Worker that owns one model and serves requests from the shared queue
struct FastEmbedActor {
    receiver: Arc<Mutex<mpsc::Receiver<FastEmbedMessage>>>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    fn new(
        receiver: Arc<Mutex<mpsc::Receiver<FastEmbedMessage>>>,
        model: TextEmbedding,
        model_name: String,
    ) -> Self {
        Self {
            receiver,
            model,
            model_name,
        }
    }

    /// Runs on a dedicated thread until every sender is dropped
    fn run(mut self) {
        loop {
            let message = match self.receiver.lock() {
                Ok(mut receiver) => receiver.blocking_recv(),
                Err(_) => None,
            };
            let Some(FastEmbedMessage::EmbedBatch { texts, tx }) = message else {
                break;
            };
            let _ = tx.send(self.embed(&texts));
        }
    }

    fn embed(&mut self, texts: &[String]) -> Result<Vec<Embedding>> {
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let vectors = self
            .model
            .embed(text_refs, None)
            .map_err(|e| Error::embedding(format!("FastEmbed embedding failed: {e}")))?;

        Ok(vectors
            .into_iter()
            .map(|mut vector| {
                normalize(&mut vector);
                let dimensions = vector.len();
                Embedding {
                    vector,
                    model: self.model_name.clone(),
                    dimensions,
                }
            })
            .collect())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

/// Parse model name string to EmbeddingModel enum and its dimension
fn parse_embedding_model(model_name: &str) -> Option<(EmbeddingModel, usize)> {
    let parsed = match model_name.to_lowercase().as_str() {
        "multilingual-e5-small" | "intfloat/multilingual-e5-small" => (
            EmbeddingModel::MultilingualE5Small,
            EMBEDDING_DIMENSION_FASTEMBED_SMALL,
        ),
        "multilingual-e5-base" | "intfloat/multilingual-e5-base" => (
            EmbeddingModel::MultilingualE5Base,
            EMBEDDING_DIMENSION_FASTEMBED_BASE,
        ),
        "multilingual-e5-large" | "intfloat/multilingual-e5-large" => (
            EmbeddingModel::MultilingualE5Large,
            EMBEDDING_DIMENSION_FASTEMBED_LARGE,
        ),
        "allminilml6v2" | "all-minilm-l6-v2" => (
            EmbeddingModel::AllMiniLML6V2,
            EMBEDDING_DIMENSION_FASTEMBED_SMALL,
        ),
        "bgesmallen" | "bge-small-en" => (
            EmbeddingModel::BGESmallENV15,
            EMBEDDING_DIMENSION_FASTEMBED_SMALL,
        ),
        "bgebaseen" | "bge-base-en" => (
            EmbeddingModel::BGEBaseENV15,
            EMBEDDING_DIMENSION_FASTEMBED_BASE,
        ),
        "bgelargeen" | "bge-large-en" => (
            EmbeddingModel::BGELargeENV15,
            EMBEDDING_DIMENSION_FASTEMBED_LARGE,
        ),
        _ => return None,
    };
    Some(parsed)
}

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model_name = config.model.as_deref().unwrap_or(FASTEMBED_DEFAULT_MODEL);
    let workers = config.workers.unwrap_or(1);
    let provider = FastEmbedProvider::from_name(model_name, workers)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local provider (multilingual-e5-large, bge-small-en, etc.)",
    factory: fastembed_factory,
};
