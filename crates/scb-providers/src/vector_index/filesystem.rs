//! Filesystem vector index provider
//!
//! In-memory index whose collection is mirrored to one JSON snapshot per
//! collection (`<dir>/<collection>.json`). The snapshot is loaded on
//! [`VectorIndexProvider::ensure_collection`] and rewritten after every
//! successful upsert, so separate processes (e.g. successive CLI runs)
//! share one index.

use async_trait::async_trait;
use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::VectorIndexProvider;
use scb_domain::value_objects::{SearchHit, VectorPoint};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::in_memory::InMemoryVectorIndexProvider;

/// On-disk form of a collection
#[derive(Debug, Serialize, Deserialize)]
struct CollectionSnapshot {
    dimensions: usize,
    points: Vec<VectorPoint>,
}

/// Filesystem-backed vector index provider
pub struct FilesystemVectorIndexProvider {
    snapshot_path: PathBuf,
    inner: InMemoryVectorIndexProvider,
    write_lock: Mutex<()>,
}

impl FilesystemVectorIndexProvider {
    /// Create an index for `collection` stored under `base_path`
    pub fn new(base_path: impl AsRef<Path>, collection: impl Into<String>) -> Self {
        let collection = collection.into();
        Self {
            snapshot_path: base_path.as_ref().join(format!("{collection}.json")),
            inner: InMemoryVectorIndexProvider::with_collection(collection),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the collection snapshot
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    async fn load_snapshot(&self) -> Result<Option<CollectionSnapshot>> {
        let content = match tokio::fs::read(&self.snapshot_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::vector_index(format!(
                    "Failed to read {}: {e}",
                    self.snapshot_path.display()
                )));
            }
        };
        serde_json::from_slice(&content).map(Some).map_err(|e| {
            Error::vector_index(format!(
                "Failed to parse {}: {e}",
                self.snapshot_path.display()
            ))
        })
    }

    async fn persist(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let Some((dimensions, points)) = self.inner.snapshot() else {
            return Ok(());
        };
        let content = serde_json::to_vec(&CollectionSnapshot { dimensions, points })?;

        if let Some(parent) = self.snapshot_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::vector_index(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        let tmp_path = self.snapshot_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await.map_err(|e| {
            Error::vector_index(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        tokio::fs::rename(&tmp_path, &self.snapshot_path)
            .await
            .map_err(|e| {
                Error::vector_index(format!(
                    "Failed to replace {}: {e}",
                    self.snapshot_path.display()
                ))
            })
    }
}

#[async_trait]
impl VectorIndexProvider for FilesystemVectorIndexProvider {
    async fn ensure_collection(&self, dimensions: usize) -> Result<()> {
        match self.load_snapshot().await? {
            Some(snapshot) => {
                self.inner.ensure_collection(snapshot.dimensions).await?;
                self.inner.upsert(&snapshot.points).await?;
                if snapshot.dimensions != dimensions {
                    return Err(Error::vector_index(format!(
                        "Collection at {} has {} dimensions, requested {}",
                        self.snapshot_path.display(),
                        snapshot.dimensions,
                        dimensions
                    )));
                }
                tracing::debug!(
                    path = %self.snapshot_path.display(),
                    points = snapshot.points.len(),
                    "Loaded vector index snapshot"
                );
                Ok(())
            }
            None => {
                self.inner.ensure_collection(dimensions).await?;
                self.persist().await
            }
        }
    }

    async fn upsert(&self, points: &[VectorPoint]) -> Result<()> {
        self.inner.upsert(points).await?;
        self.persist().await
    }

    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>> {
        self.inner.search(vector, limit).await
    }

    async fn count(&self) -> Result<usize> {
        self.inner.count().await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};

fn filesystem_vector_index_factory(
    config: &VectorIndexProviderConfig,
) -> std::result::Result<Arc<dyn VectorIndexProvider>, String> {
    let path = config
        .path
        .as_ref()
        .ok_or_else(|| "Filesystem vector index requires a path".to_string())?;
    Ok(Arc::new(FilesystemVectorIndexProvider::new(
        path,
        config.collection.clone(),
    )))
}

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static FILESYSTEM_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "filesystem",
    description: "Filesystem vector index (in-memory search, JSON snapshot per collection)",
    factory: filesystem_vector_index_factory,
};
