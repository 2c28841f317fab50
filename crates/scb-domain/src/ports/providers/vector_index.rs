use crate::error::Result;
use crate::value_objects::{SearchHit, VectorPoint};
use async_trait::async_trait;

/// Vector Index Interface
///
/// Nearest-neighbour store of `(id, vector, payload)` points bound to a
/// single collection. Writes are idempotent by point id; searches rank by
/// cosine similarity, highest first.
///
/// Implementations must validate every [`PointPayload`](crate::value_objects::PointPayload)
/// on upsert and must apply a batch all-or-nothing: a rejected point leaves
/// the index untouched.
///
/// # Example
///
/// ```ignore
/// use scb_domain::ports::providers::VectorIndexProvider;
///
/// index.ensure_collection(384).await?;
/// index.upsert(&points).await?;
/// for hit in index.search(&query_vector, 5).await? {
///     println!("{} {} {:.3}", hit.payload.service_id, hit.payload.operation_key, hit.score);
/// }
/// ```
#[async_trait]
pub trait VectorIndexProvider: Send + Sync {
    /// Create the collection if it does not exist yet
    ///
    /// # Arguments
    /// * `dimensions` - Vector length every point in the collection must have
    async fn ensure_collection(&self, dimensions: usize) -> Result<()>;

    /// Insert or overwrite a batch of points keyed by point id
    async fn upsert(&self, points: &[VectorPoint]) -> Result<()>;

    /// Top-`limit` points by cosine similarity to `vector`, descending score
    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>>;

    /// Number of points currently stored
    async fn count(&self) -> Result<usize>;

    /// Identifier of the provider implementation (e.g. "memory", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.count().await?;
        Ok(())
    }
}
