//! Ollama Embedding Provider
//!
//! Implements the EmbeddingProvider port using Ollama's local embedding API.
//! Supports local embedding models like nomic-embed-text, mxbai-embed-large, etc.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::EmbeddingProvider;
use scb_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_ARCTIC, EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
    EMBEDDING_DIMENSION_OLLAMA_MINILM, EMBEDDING_DIMENSION_OLLAMA_MXBAI,
    EMBEDDING_DIMENSION_OLLAMA_NOMIC, ERROR_MSG_REQUEST_TIMEOUT,
};
use crate::embedding::helpers::normalize;
use crate::utils::HttpResponseUtils;

/// Ollama embedding provider
///
/// Ollama does not guarantee unit-length vectors, so every returned vector
/// is normalized before it leaves the provider.
pub struct OllamaEmbeddingProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "nomic-embed-text")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, model: String, timeout: Duration, http_client: Client) -> Self {
        let dimensions = Self::known_dimensions(&model);
        Self {
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Override the vector length for models not in the built-in table
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    fn known_dimensions(model: &str) -> usize {
        match model.split(':').next().unwrap_or(model) {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            "snowflake-arctic-embed" => EMBEDDING_DIMENSION_OLLAMA_ARCTIC,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        }
    }

    /// Fetch embedding for a single text
    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::embedding(format!("HTTP request failed: {e}"))
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "Ollama").await
    }

    /// Parse embedding from response data
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let mut vector = response_data["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing embedding array"))?
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|x| x as f32)
                    .ok_or_else(|| Error::embedding("Invalid response format: non-numeric value"))
            })
            .collect::<Result<Vec<f32>>>()?;
        normalize(&mut vector);

        let dimensions = vector.len();
        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // Ollama API doesn't support batch embedding - process sequentially
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let response_data = self.fetch_single_embedding(text).await?;
            results.push(self.parse_embedding(&response_data)?);
        }

        Ok(results)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use scb_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

use crate::constants::{OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_URL};
use crate::embedding::helpers::constructor;

/// Factory function for creating Ollama embedding provider instances.
fn ollama_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = constructor::get_effective_url(config.base_url.as_deref(), OLLAMA_DEFAULT_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string());
    let timeout = constructor::get_effective_timeout(config.timeout_secs);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut provider = OllamaEmbeddingProvider::new(base_url, model, timeout, http_client);
    if let Some(dimensions) = config.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding provider (nomic-embed-text, mxbai-embed-large, etc.)",
    factory: ollama_factory,
};
