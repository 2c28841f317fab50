//! # Service Capability Browser - Provider Implementations
//!
//! User-selectable adapters for the ports defined in `scb-domain`. Every
//! adapter registers itself into the linkme registries of
//! `scb-application`; linking this crate is enough to make it resolvable
//! by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Null, Ollama, FastEmbed |
//! | Vector Index | `VectorIndexProvider` | InMemory, Filesystem, Null |
//! | Service Store | `ServiceStoreProvider` | InMemory, Filesystem |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! scb-providers = { version = "0.1", default-features = false, features = ["vectorindex-memory", "servicestore-memory"] }
//! ```

pub use scb_domain::error::{Error, Result};
pub use scb_domain::ports::providers::{
    EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Vector index provider implementations
pub mod vector_index;

/// Canonical service store implementations
pub mod service_store;
