//! External Provider Ports
//!
//! Ports for the external services the catalog depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation |
//! | VectorIndexProvider | Point storage and cosine top-K search |
//! | ServiceStoreProvider | Canonical service descriptor documents |

/// Embedding provider port
pub mod embedding;
/// Service store provider port
pub mod service_store;
/// Vector index provider port
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use service_store::ServiceStoreProvider;
pub use vector_index::VectorIndexProvider;
