//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic search |
//! | [`VectorPoint`] | One embedded capability stored in the vector index |
//! | [`PointPayload`] | Typed (service, operation) payload of a point |
//! | [`SearchHit`] | Ranked hit returned by the vector index |
//! | [`ServiceView`] | Service view reconstructed for a search result |

/// Semantic embedding value objects
pub mod embedding;
/// Vector point value objects
pub mod point;
/// Search-related value objects
pub mod search;

pub use embedding::Embedding;
pub use point::{PointPayload, VectorPoint};
pub use search::{MissingOperation, SearchHit, ServiceView, ViewMode};
