//! Vector Point Value Objects
//!
//! The unit of storage in the vector index: one embedded capability.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value Object: payload attached to every vector point
///
/// Names the owning service and the operation whose description was
/// embedded. Typed so the vector index boundary can reject malformed
/// payloads instead of handing out dangling lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointPayload {
    /// Id of the owning service in the canonical store
    pub service_id: String,
    /// Operation key within the owning service
    pub operation_key: String,
}

impl PointPayload {
    /// Create a new payload
    pub fn new(service_id: impl Into<String>, operation_key: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            operation_key: operation_key.into(),
        }
    }

    /// Reject payloads with empty fields
    pub fn validate(&self) -> Result<()> {
        if self.service_id.is_empty() {
            return Err(Error::vector_index("Point payload has empty service_id"));
        }
        if self.operation_key.is_empty() {
            return Err(Error::vector_index("Point payload has empty operation_key"));
        }
        Ok(())
    }
}

/// Value Object: one embedded capability
///
/// `id` is derived from the capability text alone, so re-indexing the same
/// text overwrites the same point. Identical text in two services collides
/// on the same id and the later writer owns the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPoint {
    /// Deterministic point id
    pub id: String,
    /// Unit-normalized embedding of the capability text
    pub vector: Vec<f32>,
    /// Owning service and operation
    pub payload: PointPayload,
}

impl VectorPoint {
    /// Create a new vector point
    pub fn new(id: impl Into<String>, vector: Vec<f32>, payload: PointPayload) -> Self {
        Self {
            id: id.into(),
            vector,
            payload,
        }
    }

    /// Dimensionality of the stored vector
    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}
