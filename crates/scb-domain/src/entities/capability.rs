//! Capability entry entity

use serde::{Deserialize, Serialize};

/// Entity: one embeddable operation of a service
///
/// Derived fresh from a [`ServiceDescriptor`](super::ServiceDescriptor)
/// on every indexing call and never persisted as such.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CapabilityEntry {
    /// Owning service id
    pub service_id: String,
    /// Operation key, e.g. `"GET /pets"`
    pub operation_key: String,
    /// Description text that gets embedded
    pub text: String,
}

impl CapabilityEntry {
    /// Create a new capability entry
    pub fn new(
        service_id: impl Into<String>,
        operation_key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            operation_key: operation_key.into(),
            text: text.into(),
        }
    }
}
