//! Null embedding provider for testing and development
//!
//! Produces deterministic bag-of-words embeddings: every lowercase word is
//! hashed into a signed bucket and the result is unit-normalized. Texts that
//! share words land close together, so similarity ranking behaves sensibly
//! without a model. No external dependencies - always works offline.

use async_trait::async_trait;

use scb_domain::error::Result;
use scb_domain::ports::providers::EmbeddingProvider;
use scb_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Null embedding provider for testing
///
/// # Example
///
/// ```rust
/// use scb_providers::embedding::NullEmbeddingProvider;
/// use scb_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider with the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null embedding provider with a custom dimension
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        "null"
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let hash = fnv1a(&word.to_lowercase());
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm == 0.0 {
            vector[0] = 1.0;
        } else {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn fnv1a(word: &str) -> u64 {
    word.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: self.embed_text(text),
                model: "null-test".to_string(),
                dimensions: self.dimensions,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use scb_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

/// Factory function for creating null embedding provider instances.
fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let provider = match config.dimensions {
        Some(0) => return Err("Null embedding dimensions must be positive".to_string()),
        Some(dimensions) => NullEmbeddingProvider::with_dimensions(dimensions),
        None => NullEmbeddingProvider::new(),
    };
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic bag-of-words embeddings)",
    factory: null_factory,
};
