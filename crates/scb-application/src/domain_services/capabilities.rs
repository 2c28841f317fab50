//! Capability extraction
//!
//! Decomposes a service descriptor into the capability entries that get
//! embedded, one per operation with non-blank description text.

use scb_domain::entities::{CapabilityEntry, ServiceDescriptor};

/// Extract the embeddable capabilities of a service
///
/// Entries come back sorted by operation key, so the result is the same
/// for equal descriptors regardless of how their maps were built.
/// Operations whose text is empty or whitespace-only are skipped.
pub fn extract_capabilities(service: &ServiceDescriptor) -> Vec<CapabilityEntry> {
    service
        .capabilities
        .iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(operation, text)| CapabilityEntry::new(&service.id, operation, text))
        .collect()
}
