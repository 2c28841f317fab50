//! Indexing pipeline configuration

use scb_domain::constants::{INDEXING_DEFAULT_WORKERS, INDEXING_EMBED_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Indexing pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    /// Concurrent embedding tasks per indexing call (1 is sequential)
    pub workers: usize,
    /// Deadline for one embedding task in seconds
    pub embed_timeout_secs: u64,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            workers: INDEXING_DEFAULT_WORKERS,
            embed_timeout_secs: INDEXING_EMBED_TIMEOUT_SECS,
        }
    }
}

impl IndexingConfig {
    /// Embedding task deadline
    pub fn embed_timeout(&self) -> Duration {
        Duration::from_secs(self.embed_timeout_secs)
    }
}
