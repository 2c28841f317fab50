//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the catalog pipelines.
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`bootstrap`] | Resolves providers from config into a [`bootstrap::Catalog`] |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Provider and model health reporting |
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{Catalog, init_catalog};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
