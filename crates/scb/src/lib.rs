//! # Service Capability Browser
//!
//! Indexes service descriptors by what their operations do and finds
//! services from a natural-language query.
//!
//! Each capability text of a descriptor is embedded into its own vector
//! point; the descriptor itself is kept in a canonical store. A search
//! embeds the query, takes the nearest capability points and rebuilds a
//! view of each hit from the canonical record.
//!
//! ## Example
//!
//! ```ignore
//! use scb::domain::ServiceDescriptor;
//! use scb::infrastructure::{ConfigLoader, init_catalog};
//!
//! let catalog = init_catalog(ConfigLoader::new().load()?).await?;
//!
//! let petstore = ServiceDescriptor::new("petstore", "Petstore")
//!     .with_capability("GET /pets", "list all pets", "http://pets.local/pets");
//! catalog.index_service(&petstore).await?;
//!
//! let views = catalog.search("which service lists pets?", 3).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, error taxonomy and port traits
//! - `application` - Indexing and retrieval pipelines, provider registries
//! - `infrastructure` - Configuration, logging, health and the `Catalog` facade
//! - `providers` - Embedding, vector index and service store adapters
//! - `cli` - The `scb` command line

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use scb_domain::*;
}

/// Application layer - use cases and registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use scb_application::*;
}

/// Infrastructure layer - config, logging, health and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use scb_infrastructure::*;
}

/// Provider adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use scb_providers::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result, ServiceDescriptor, ServiceView, ViewMode};

// Re-export the main entry point at the crate root
pub use infrastructure::{Catalog, init_catalog};
