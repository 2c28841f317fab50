//! Point identity scheme
//!
//! Point ids are a version-5 UUID over the DNS namespace and the capability
//! text. The id depends on the text alone: re-indexing unchanged text hits
//! the same point, and identical text in two different services collides on
//! one point whose payload belongs to the latest writer.

use uuid::Uuid;

/// Derive the vector point id for a capability text
///
/// ```rust
/// use scb_application::domain_services::identity::derive_point_id;
///
/// assert_eq!(derive_point_id("fetch x"), derive_point_id("fetch x"));
/// assert_ne!(derive_point_id("fetch x"), derive_point_id("fetch y"));
/// ```
pub fn derive_point_id(text: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, text.as_bytes())
        .hyphenated()
        .to_string()
}
