//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the catalog core and its
//! backends. High-level modules (application) depend on these traits;
//! low-level modules (providers) implement them.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider};
