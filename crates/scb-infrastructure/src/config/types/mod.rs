//! Configuration types module

pub mod app;
pub mod indexing;
pub mod logging;
pub mod providers;
pub mod search;

// Re-export main types
pub use app::AppConfig;
pub use indexing::IndexingConfig;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingConfig, ProvidersConfig, ServiceStoreConfig, VectorIndexConfig};
pub use search::SearchConfig;
