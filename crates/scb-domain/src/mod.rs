//! # Service Capability Browser - Domain Layer
//!
//! Core types of the service catalog: service descriptors, the capability
//! entries derived from them, vector points, search views, the error
//! taxonomy, and the ports the application layer drives.
//!
//! This crate has no runtime dependencies beyond serialization and error
//! handling; every backend is reached through a trait in [`ports`].

/// Domain layer constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{CapabilityEntry, ServiceDescriptor};
pub use error::{Error, Result};
pub use value_objects::{
    Embedding, MissingOperation, PointPayload, SearchHit, ServiceView, VectorPoint, ViewMode,
};
