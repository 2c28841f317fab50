//! Null vector index provider for testing
//!
//! Accepts every write and stores nothing. Useful where the vector side of
//! the catalog is not under test, or to run the canonical store alone.

use async_trait::async_trait;
use scb_domain::error::Result;
use scb_domain::ports::providers::VectorIndexProvider;
use scb_domain::value_objects::{SearchHit, VectorPoint};
use std::sync::Arc;

/// Null vector index provider
///
/// Payloads are still validated on upsert so misuse surfaces the same way
/// it would against a real backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVectorIndexProvider;

impl NullVectorIndexProvider {
    /// Create a new null vector index provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VectorIndexProvider for NullVectorIndexProvider {
    async fn ensure_collection(&self, _dimensions: usize) -> Result<()> {
        Ok(())
    }

    async fn upsert(&self, points: &[VectorPoint]) -> Result<()> {
        for point in points {
            point.payload.validate()?;
        }
        Ok(())
    }

    async fn search(&self, _vector: &[f32], _limit: usize) -> Result<Vec<SearchHit>> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};

fn null_vector_index_factory(
    _config: &VectorIndexProviderConfig,
) -> std::result::Result<Arc<dyn VectorIndexProvider>, String> {
    Ok(Arc::new(NullVectorIndexProvider::new()))
}

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static NULL_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "null",
    description: "Null vector index (discards points, returns no hits)",
    factory: null_vector_index_factory,
};
