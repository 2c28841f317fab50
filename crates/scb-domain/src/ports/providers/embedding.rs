use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Semantic Text Embedding Interface
///
/// Contract for services that turn text into fixed-length, unit-normalized
/// vectors. The catalog never chooses the model; it only relies on
/// deterministic dimensionality and on failures surfacing as
/// [`Error::Embedding`].
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()` unless a single-item path is cheaper.
///
/// # Example
///
/// ```ignore
/// use scb_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("query: list all pets").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Number of dimensions in every vector this provider returns
    fn dimensions(&self) -> usize;

    /// Identifier of the provider implementation (e.g. "null", "ollama")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
