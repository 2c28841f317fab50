//! Domain Services
//!
//! Pure functions the pipelines are built from.

/// Capability extraction from service descriptors
pub mod capabilities;
/// Deterministic point identity
pub mod identity;

pub use capabilities::extract_capabilities;
pub use identity::derive_point_id;
