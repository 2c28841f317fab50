//! Health reporting
//!
//! Aggregates one [`HealthCheck`] per catalog component into a
//! [`HealthResponse`]. The embedding check folds in the model readiness
//! state, so a model that is still loading reports `degraded` rather than
//! `up`.

use crate::logging::log_health_check;
use scb_application::ports::providers::{
    EmbeddingProvider, ServiceStoreProvider, VectorIndexProvider,
};
use scb_application::readiness::{ModelReadiness, ReadinessState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Component is fully operational
    Up,
    /// Component answers but cannot serve every request yet
    Degraded,
    /// Component is not operational
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Check if the service is operational (healthy or degraded)
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Up | Self::Degraded)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of last check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error: None,
            details: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            status: HealthStatus::Down,
            error,
            ..Self::healthy(name)
        }
    }

    /// Create a degraded health check
    pub fn degraded<S: Into<String>>(name: S, reason: Option<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            error: reason,
            ..Self::healthy(name)
        }
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set additional details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Worst status among the checks
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Total response time in milliseconds
    pub response_time_ms: u64,
    /// Individual health check results
    pub checks: HashMap<String, HealthCheck>,
    /// System information
    pub system: SystemInfo,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthResponse {
    /// Create a new health response
    pub fn new() -> Self {
        Self {
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            checks: HashMap::new(),
            system: SystemInfo::default(),
        }
    }

    /// Add a health check result
    pub fn add_check(mut self, check: HealthCheck) -> Self {
        if check.status == HealthStatus::Down {
            self.status = HealthStatus::Down;
        } else if check.status == HealthStatus::Degraded && self.status == HealthStatus::Up {
            self.status = HealthStatus::Degraded;
        }

        self.checks.insert(check.name.clone(), check);
        self
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check if the overall system is healthy
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }

    /// Whether the catalog can take traffic (healthy or degraded)
    pub fn is_ready(&self) -> bool {
        self.status.is_operational()
    }
}

/// System information for health responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Crate version
    pub version: String,
    /// Embedding model readiness
    pub model_readiness: ReadinessState,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            model_readiness: ReadinessState::Uninitialized,
        }
    }
}

/// Health check function trait
#[async_trait::async_trait]
pub trait HealthChecker: Send + Sync {
    /// Name the check is reported under
    fn name(&self) -> &str;

    /// Perform a health check
    async fn check_health(&self) -> HealthCheck;
}

/// Ordered set of component checkers
#[derive(Clone, Default)]
pub struct HealthRegistry {
    checkers: Vec<Arc<dyn HealthChecker>>,
}

impl HealthRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a health checker
    pub fn register(mut self, checker: Arc<dyn HealthChecker>) -> Self {
        self.checkers.push(checker);
        self
    }

    /// Names of the registered checks, in registration order
    pub fn list_checks(&self) -> Vec<String> {
        self.checkers.iter().map(|c| c.name().to_string()).collect()
    }

    /// Run every check, each bounded by `timeout`
    pub async fn perform_health_checks(&self, timeout: Duration) -> HealthResponse {
        let start_time = Instant::now();
        let mut response = HealthResponse::new();

        for checker in &self.checkers {
            let check = match tokio::time::timeout(timeout, checker.check_health()).await {
                Ok(check) => check,
                Err(_) => HealthCheck::failed(
                    checker.name(),
                    Some(format!("Health check timed out after {timeout:?}")),
                ),
            };
            log_health_check(checker.name(), check.status.is_healthy(), check.error.as_deref());
            response = response.add_check(check);
        }

        response.with_response_time(start_time.elapsed())
    }
}

/// Checkers for the catalog components
pub mod checkers {
    use super::*;

    /// Embedding backend plus model readiness
    pub struct EmbeddingHealthChecker {
        provider: Arc<dyn EmbeddingProvider>,
        readiness: Arc<ModelReadiness>,
    }

    impl EmbeddingHealthChecker {
        pub fn new(provider: Arc<dyn EmbeddingProvider>, readiness: Arc<ModelReadiness>) -> Self {
            Self {
                provider,
                readiness,
            }
        }
    }

    #[async_trait::async_trait]
    impl HealthChecker for EmbeddingHealthChecker {
        fn name(&self) -> &str {
            "embedding"
        }

        async fn check_health(&self) -> HealthCheck {
            let start_time = Instant::now();
            let state = self.readiness.state();
            let details = serde_json::json!({
                "provider": self.provider.provider_name(),
                "dimensions": self.provider.dimensions(),
                "readiness": state,
            });

            let check = match state {
                ReadinessState::Ready => match self.provider.health_check().await {
                    Ok(()) => HealthCheck::healthy(self.name()),
                    Err(e) => HealthCheck::failed(self.name(), Some(e.to_string())),
                },
                ReadinessState::Failed => {
                    HealthCheck::failed(self.name(), self.readiness.failure_reason())
                }
                ReadinessState::Uninitialized | ReadinessState::Loading => HealthCheck::degraded(
                    self.name(),
                    Some(format!("Embedding model is {state}")),
                ),
            };
            check
                .with_details(details)
                .with_response_time(start_time.elapsed())
        }
    }

    /// Vector index reachability and point count
    pub struct VectorIndexHealthChecker {
        provider: Arc<dyn VectorIndexProvider>,
    }

    impl VectorIndexHealthChecker {
        pub fn new(provider: Arc<dyn VectorIndexProvider>) -> Self {
            Self { provider }
        }
    }

    #[async_trait::async_trait]
    impl HealthChecker for VectorIndexHealthChecker {
        fn name(&self) -> &str {
            "vector_index"
        }

        async fn check_health(&self) -> HealthCheck {
            let start_time = Instant::now();
            let result = match self.provider.health_check().await {
                Ok(()) => self.provider.count().await,
                Err(e) => Err(e),
            };

            let check = match result {
                Ok(points) => HealthCheck::healthy(self.name()).with_details(serde_json::json!({
                    "provider": self.provider.provider_name(),
                    "points": points,
                })),
                Err(e) => HealthCheck::failed(self.name(), Some(e.to_string())),
            };
            check.with_response_time(start_time.elapsed())
        }
    }

    /// Canonical service store reachability
    pub struct ServiceStoreHealthChecker {
        provider: Arc<dyn ServiceStoreProvider>,
    }

    impl ServiceStoreHealthChecker {
        pub fn new(provider: Arc<dyn ServiceStoreProvider>) -> Self {
            Self { provider }
        }
    }

    #[async_trait::async_trait]
    impl HealthChecker for ServiceStoreHealthChecker {
        fn name(&self) -> &str {
            "service_store"
        }

        async fn check_health(&self) -> HealthCheck {
            let start_time = Instant::now();
            let check = match self.provider.health_check().await {
                Ok(()) => HealthCheck::healthy(self.name()).with_details(serde_json::json!({
                    "provider": self.provider.provider_name(),
                })),
                Err(e) => HealthCheck::failed(self.name(), Some(e.to_string())),
            };
            check.with_response_time(start_time.elapsed())
        }
    }
}
