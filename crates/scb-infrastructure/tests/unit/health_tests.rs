//! Health check aggregation

use async_trait::async_trait;
use scb_infrastructure::health::{
    HealthCheck, HealthChecker, HealthRegistry, HealthResponse, HealthStatus,
};
use std::sync::Arc;
use std::time::Duration;

struct StaticChecker {
    name: &'static str,
    status: HealthStatus,
}

#[async_trait]
impl HealthChecker for StaticChecker {
    fn name(&self) -> &str {
        self.name
    }

    async fn check_health(&self) -> HealthCheck {
        match self.status {
            HealthStatus::Up => HealthCheck::healthy(self.name),
            HealthStatus::Degraded => HealthCheck::degraded(self.name, None),
            HealthStatus::Down => HealthCheck::failed(self.name, Some("down".to_string())),
        }
    }
}

struct HangingChecker;

#[async_trait]
impl HealthChecker for HangingChecker {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn check_health(&self) -> HealthCheck {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        HealthCheck::healthy("hanging")
    }
}

#[test]
fn test_health_check_creation() {
    let healthy_check = HealthCheck::healthy("test");
    assert_eq!(healthy_check.status, HealthStatus::Up);
    assert!(healthy_check.error.is_none());

    let failed_check = HealthCheck::failed("test", Some("error message".to_string()));
    assert_eq!(failed_check.status, HealthStatus::Down);
    assert_eq!(failed_check.error, Some("error message".to_string()));
}

#[test]
fn test_health_response_aggregation() {
    let response = HealthResponse::new()
        .add_check(HealthCheck::healthy("check1"))
        .add_check(HealthCheck::healthy("check2"));

    assert_eq!(response.status, HealthStatus::Up);
    assert_eq!(response.checks.len(), 2);

    let degraded_response = response.add_check(HealthCheck::degraded("check3", None));
    assert_eq!(degraded_response.status, HealthStatus::Degraded);
    assert!(degraded_response.is_ready());

    let down_response = degraded_response
        .add_check(HealthCheck::failed("check4", None))
        .add_check(HealthCheck::healthy("check5"));
    assert_eq!(down_response.status, HealthStatus::Down);
    assert!(!down_response.is_ready());
}

#[test]
fn test_health_status_methods() {
    assert!(HealthStatus::Up.is_healthy());
    assert!(HealthStatus::Up.is_operational());
    assert!(HealthStatus::Degraded.is_operational());
    assert!(!HealthStatus::Down.is_healthy());
    assert!(!HealthStatus::Down.is_operational());
}

#[test]
fn test_health_status_serializes_lowercase() {
    let json = serde_json::to_string(&HealthStatus::Degraded).expect("serialize");
    assert_eq!(json, "\"degraded\"");
}

#[tokio::test]
async fn test_registry_runs_checks_in_order() {
    let registry = HealthRegistry::new()
        .register(Arc::new(StaticChecker {
            name: "a",
            status: HealthStatus::Up,
        }))
        .register(Arc::new(StaticChecker {
            name: "b",
            status: HealthStatus::Degraded,
        }));

    assert_eq!(registry.list_checks(), vec!["a", "b"]);

    let response = registry
        .perform_health_checks(Duration::from_secs(1))
        .await;
    assert_eq!(response.status, HealthStatus::Degraded);
    assert!(response.checks["a"].status.is_healthy());
}

#[tokio::test(start_paused = true)]
async fn test_registry_times_out_hanging_checks() {
    let registry = HealthRegistry::new().register(Arc::new(HangingChecker));

    let response = registry
        .perform_health_checks(Duration::from_secs(5))
        .await;

    assert_eq!(response.status, HealthStatus::Down);
    let error = response.checks["hanging"].error.clone().unwrap_or_default();
    assert!(error.contains("timed out"));
}
