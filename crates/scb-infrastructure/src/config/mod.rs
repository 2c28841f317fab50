//! Configuration management
//!
//! Typed configuration sections plus the figment-based [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
