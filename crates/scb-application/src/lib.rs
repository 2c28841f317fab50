//! Application Layer - Service Capability Browser
//!
//! Implements the catalog's two pipelines on top of the domain ports:
//!
//! - **Indexing**: extract capabilities from a service descriptor, embed
//!   each one concurrently, upsert the vector points, then store the
//!   canonical record.
//! - **Retrieval**: embed a query, take the nearest capability points, and
//!   resolve each hit against the canonical store.
//!
//! ## Ports
//!
//! - `ports::providers::*`: backend interfaces (embedding, vector index, service store)
//! - `ports::registry::*`: linkme registries provider crates submit into
//! - `ports::services::*`: use case interfaces
//!
//! ## Dependencies
//!
//! This crate depends only on `scb-domain` and runtime-agnostic libraries.
//! Concrete providers live in `scb-providers`.

pub mod domain_services;
pub mod ports;
pub mod readiness;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use readiness::{ModelReadiness, ReadinessState};
pub use use_cases::*;
