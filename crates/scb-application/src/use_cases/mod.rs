//! Use Cases
//!
//! Application services implementing the indexing, retrieval and catalog
//! interfaces declared in `ports::services`.

pub mod catalog_service;
pub mod indexing_service;
pub mod search_service;

pub use catalog_service::CatalogServiceImpl;
pub use indexing_service::{IndexingOptions, IndexingServiceImpl};
pub use search_service::{SearchOptions, SearchServiceImpl};
