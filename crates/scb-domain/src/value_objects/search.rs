//! Search-Related Value Objects

use crate::entities::ServiceDescriptor;
use crate::value_objects::PointPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Value Object: ranked vector index hit
///
/// Results from the vector index are ordered by descending `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Id of the matched vector point
    pub point_id: String,
    /// Owning service and operation of the matched point
    pub payload: PointPayload,
    /// Cosine similarity to the query (higher is better)
    pub score: f32,
}

/// How much of a matched service a search returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Only the matched operation's capability and endpoint
    #[default]
    Capability,
    /// The full canonical descriptor, once per service
    Service,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability => write!(f, "capability"),
            Self::Service => write!(f, "service"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "capability" | "operation" => Ok(Self::Capability),
            "service" | "full" => Ok(Self::Service),
            other => Err(format!(
                "Invalid view mode: {other}. Use capability or service"
            )),
        }
    }
}

/// Why a hit could not be narrowed to its matched operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingOperation {
    /// The canonical record no longer lists the operation's capability text
    Capability,
    /// The canonical record has no endpoint for the operation
    Endpoint,
}

impl fmt::Display for MissingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability => write!(f, "operation missing from capabilities"),
            Self::Endpoint => write!(f, "operation missing from endpoints"),
        }
    }
}

/// Value Object: service view returned by a search
///
/// Either scoped to the single matched operation or carrying the full
/// descriptor maps, depending on the [`ViewMode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceView {
    /// Owning service id
    pub service_id: String,
    /// Service name
    pub name: String,
    /// Service description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operation key to capability text
    pub capabilities: BTreeMap<String, String>,
    /// Operation key to endpoint URL
    pub endpoints: BTreeMap<String, String>,
    /// Operation whose description matched the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_operation: Option<String>,
    /// Similarity score of the hit that produced this view
    pub score: f32,
}

impl ServiceView {
    /// View carrying the whole descriptor
    pub fn full(
        service: &ServiceDescriptor,
        matched_operation: Option<&str>,
        score: f32,
    ) -> Self {
        Self {
            service_id: service.id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            capabilities: service.capabilities.clone(),
            endpoints: service.endpoints.clone(),
            matched_operation: matched_operation.map(str::to_string),
            score,
        }
    }

    /// View restricted to one operation of the descriptor
    ///
    /// Fails when the operation has drifted out of either map since the
    /// point was indexed.
    pub fn scoped(
        service: &ServiceDescriptor,
        operation: &str,
        score: f32,
    ) -> Result<Self, MissingOperation> {
        let text = service
            .capabilities
            .get(operation)
            .ok_or(MissingOperation::Capability)?;
        let url = service
            .endpoints
            .get(operation)
            .ok_or(MissingOperation::Endpoint)?;

        Ok(Self {
            service_id: service.id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            capabilities: BTreeMap::from([(operation.to_string(), text.clone())]),
            endpoints: BTreeMap::from([(operation.to_string(), url.clone())]),
            matched_operation: Some(operation.to_string()),
            score,
        })
    }
}
