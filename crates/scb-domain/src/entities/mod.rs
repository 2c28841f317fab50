//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ServiceDescriptor`] | Canonical record of a catalogued service |
//! | [`CapabilityEntry`] | One (operation, description) pair derived for embedding |

/// Capability entry entity
pub mod capability;
/// Service descriptor entity
pub mod service;

pub use capability::CapabilityEntry;
pub use service::ServiceDescriptor;
