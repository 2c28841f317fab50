//! Provider Registries
//!
//! Compile-time registration of provider adapters. Each adapter crate
//! submits an entry into one of the distributed slices below; bootstrap
//! code resolves the configured provider by name.

pub mod embedding;
pub mod service_store;
pub mod vector_index;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
pub use service_store::{
    SERVICE_STORE_PROVIDERS, ServiceStoreProviderConfig, ServiceStoreProviderEntry,
    list_service_store_providers, resolve_service_store_provider,
};
pub use vector_index::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
    list_vector_index_providers, resolve_vector_index_provider,
};
