//! In-memory vector index provider implementation
//!
//! Provides an in-memory vector index for development and testing.
//! Data is not persisted and will be lost on restart.

use async_trait::async_trait;
use dashmap::DashMap;
use scb_domain::constants::VECTOR_COLLECTION_DEFAULT;
use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::VectorIndexProvider;
use scb_domain::value_objects::{PointPayload, SearchHit, VectorPoint};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

/// Points of one collection, keyed by point id
struct CollectionData {
    dimensions: usize,
    points: HashMap<String, (Vec<f32>, PointPayload)>,
}

/// In-memory vector index provider
///
/// Bound to a single named collection. The collection must be created with
/// [`VectorIndexProvider::ensure_collection`] before points are upserted;
/// searching a missing collection yields no hits.
pub struct InMemoryVectorIndexProvider {
    collection: String,
    collections: Arc<DashMap<String, CollectionData>>,
}

impl InMemoryVectorIndexProvider {
    /// Create a new in-memory index bound to the default collection
    pub fn new() -> Self {
        Self::with_collection(VECTOR_COLLECTION_DEFAULT)
    }

    /// Create a new in-memory index bound to `collection`
    pub fn with_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            collections: Arc::new(DashMap::new()),
        }
    }

    /// Name of the bound collection
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Dimensions and every stored point of the bound collection
    ///
    /// `None` until the collection has been created.
    pub fn snapshot(&self) -> Option<(usize, Vec<VectorPoint>)> {
        self.collections.get(&self.collection).map(|coll| {
            let points = coll
                .points
                .iter()
                .map(|(id, (vector, payload))| {
                    VectorPoint::new(id.clone(), vector.clone(), payload.clone())
                })
                .collect();
            (coll.dimensions, points)
        })
    }

    /// Stored points with the given ids; unknown ids are ignored
    pub fn get_points(&self, ids: &[String]) -> Vec<VectorPoint> {
        let Some(coll) = self.collections.get(&self.collection) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| {
                coll.points.get(id).map(|(vector, payload)| {
                    VectorPoint::new(id.clone(), vector.clone(), payload.clone())
                })
            })
            .collect()
    }

    fn missing_collection(&self) -> Error {
        Error::vector_index(format!("Collection '{}' not found", self.collection))
    }
}

impl Default for InMemoryVectorIndexProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndexProvider for InMemoryVectorIndexProvider {
    async fn ensure_collection(&self, dimensions: usize) -> Result<()> {
        if dimensions == 0 {
            return Err(Error::vector_index("Collection dimensions must be positive"));
        }
        let entry = self
            .collections
            .entry(self.collection.clone())
            .or_insert_with(|| CollectionData {
                dimensions,
                points: HashMap::new(),
            });
        if entry.dimensions != dimensions {
            return Err(Error::vector_index(format!(
                "Collection '{}' exists with {} dimensions, requested {}",
                self.collection, entry.dimensions, dimensions
            )));
        }
        Ok(())
    }

    async fn upsert(&self, points: &[VectorPoint]) -> Result<()> {
        let mut coll = self
            .collections
            .get_mut(&self.collection)
            .ok_or_else(|| self.missing_collection())?;

        // Validate the whole batch before touching the collection
        for point in points {
            point.payload.validate()?;
            if point.id.is_empty() {
                return Err(Error::vector_index("Point id must not be empty"));
            }
            if point.dimensions() != coll.dimensions {
                return Err(Error::vector_index(format!(
                    "Point '{}' has {} dimensions, collection '{}' expects {}",
                    point.id,
                    point.dimensions(),
                    self.collection,
                    coll.dimensions
                )));
            }
        }

        for point in points {
            coll.points
                .insert(point.id.clone(), (point.vector.clone(), point.payload.clone()));
        }
        Ok(())
    }

    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>> {
        // Return empty results for non-existent collections (graceful degradation)
        let Some(coll) = self.collections.get(&self.collection) else {
            return Ok(Vec::new());
        };
        if limit == 0 {
            return Ok(Vec::new());
        }
        if vector.len() != coll.dimensions {
            return Err(Error::vector_index(format!(
                "Query vector has {} dimensions, collection '{}' expects {}",
                vector.len(),
                self.collection,
                coll.dimensions
            )));
        }

        let query_norm = compute_norm(vector);

        // Min-heap for top-k selection: O(n log k)
        let mut heap: BinaryHeap<ScoredItem<'_>> = BinaryHeap::with_capacity(limit + 1);
        for (id, (stored, _)) in &coll.points {
            let item = ScoredItem {
                score: cosine_similarity_with_norm(vector, stored, query_norm),
                id,
            };
            if heap.len() < limit {
                heap.push(item);
            } else if heap.peek().is_some_and(|min| item.cmp(min) == Ordering::Less) {
                heap.pop();
                heap.push(item);
            }
        }

        let mut items = heap.into_vec();
        items.sort();

        Ok(items
            .into_iter()
            .filter_map(|item| {
                coll.points.get(item.id).map(|(_, payload)| SearchHit {
                    point_id: item.id.clone(),
                    payload: payload.clone(),
                    score: item.score,
                })
            })
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self
            .collections
            .get(&self.collection)
            .map_or(0, |coll| coll.points.len()))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

/// Scored item for heap-based top-k selection
///
/// Ordered best-first (higher score, then smaller id), so the max of the
/// heap is the worst kept item.
#[derive(PartialEq)]
struct ScoredItem<'a> {
    score: f32,
    id: &'a String,
}

impl Eq for ScoredItem<'_> {}

impl Ord for ScoredItem<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.id.cmp(other.id))
    }
}

impl PartialOrd for ScoredItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};

/// Factory function for creating in-memory vector index provider instances.
fn in_memory_vector_index_factory(
    config: &VectorIndexProviderConfig,
) -> std::result::Result<Arc<dyn VectorIndexProvider>, String> {
    Ok(Arc::new(InMemoryVectorIndexProvider::with_collection(
        config.collection.clone(),
    )))
}

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static MEMORY_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "memory",
    description: "In-memory vector index (cosine, non-persistent)",
    factory: in_memory_vector_index_factory,
};
