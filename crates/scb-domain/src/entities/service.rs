//! Service descriptor entity

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Entity: catalogued external service
///
/// The canonical record of a service. It is created or replaced wholesale
/// by the indexing pipeline and deleted by id, never patched in place.
///
/// `capabilities` and `endpoints` share the same operation-key space
/// (e.g. `"GET /pets"`). The two maps are expected to agree but this is
/// not enforced; retrieval tolerates drift between them.
///
/// Fields the catalog does not model are kept in `extra` so the record
/// round-trips unchanged through the canonical store.
///
/// ## Example
///
/// ```rust
/// use scb_domain::entities::ServiceDescriptor;
///
/// let service = ServiceDescriptor::new("petstore", "Petstore")
///     .with_capability("GET /pets", "List all pets", "http://pets.local/pets");
/// assert_eq!(service.capabilities.len(), 1);
/// assert_eq!(service.endpoints["GET /pets"], "http://pets.local/pets");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Caller-assigned, globally unique identifier
    #[serde(alias = "_id")]
    pub id: String,
    /// Human-readable service name
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
    /// Free-text description of the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operation key to human description of what the operation does
    #[serde(default, deserialize_with = "deserialize_capabilities")]
    pub capabilities: BTreeMap<String, String>,
    /// Operation key to endpoint URL
    #[serde(default, deserialize_with = "deserialize_endpoints")]
    pub endpoints: BTreeMap<String, String>,
    /// Fields outside the catalog model, stored verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ServiceDescriptor {
    /// Create an empty descriptor with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add one operation with its description and endpoint URL
    pub fn with_capability(
        mut self,
        operation: impl Into<String>,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let operation = operation.into();
        self.capabilities.insert(operation.clone(), text.into());
        self.endpoints.insert(operation, url.into());
        self
    }

    /// Check the fields the catalog requires before indexing
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_argument("Missing 'id' field"));
        }
        Ok(())
    }
}

/// A JSON `null` becomes the field's default
fn deserialize_nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Endpoints without a URL are dropped, so retrieval sees them as missing.
fn deserialize_endpoints<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<String>> = deserialize_nullable(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, url)| url.map(|url| (key, url)))
        .collect())
}

/// Capability values may arrive as JSON `null`; they become empty text and
/// are skipped at extraction time.
fn deserialize_capabilities<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, text)| (key, text.unwrap_or_default()))
        .collect())
}
