//! Application Ports
//!
//! - `providers`: backend ports, re-exported from the domain
//! - `registry`: linkme registries adapters register into
//! - `services`: interfaces the use cases implement

/// Provider ports (re-exported from `scb-domain`)
pub mod providers {
    pub use scb_domain::ports::providers::*;
}
pub mod registry;
pub mod services;

pub use providers::{EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider};
pub use services::{
    CatalogServiceInterface, IndexingReceipt, IndexingServiceInterface, SearchRequest,
    SearchServiceInterface,
};
