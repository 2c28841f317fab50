//! Indexing pipeline: barrier semantics, idempotence, and documented gaps

use crate::test_utils::{
    FlakyEmbeddingProvider, Harness, MisreportingEmbeddingProvider, SlowEmbeddingProvider,
    TrackingEmbeddingProvider, petstore, svc1,
};
use scb_application::domain_services::derive_point_id;
use scb_application::ports::services::{
    CatalogServiceInterface, IndexingServiceInterface, SearchServiceInterface,
};
use scb_application::use_cases::{IndexingOptions, SearchOptions};
use scb_domain::entities::ServiceDescriptor;
use scb_domain::ports::providers::ServiceStoreProvider;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_index_service_writes_points_and_record() {
    let h = Harness::new().await;

    let receipt = h.indexing.index_service(&svc1()).await.expect("index");

    assert_eq!(receipt.service_id, "svc1");
    assert_eq!(receipt.points_upserted, 1);
    assert_eq!(receipt.point_ids, vec![derive_point_id("fetch x")]);
    assert_eq!(h.point_count().await, 1);
    assert_eq!(h.catalog.get_service("svc1").await.expect("get"), svc1());
}

#[tokio::test]
async fn test_point_payload_names_service_and_operation() {
    let h = Harness::new().await;
    h.indexing.index_service(&svc1()).await.expect("index");

    let points = h
        .index
        .get_points(&[derive_point_id("fetch x")]);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].payload.service_id, "svc1");
    assert_eq!(points[0].payload.operation_key, "GET /x");
}

#[tokio::test]
async fn test_receipt_point_ids_are_sorted() {
    let h = Harness::new().await;
    let receipt = h.indexing.index_service(&petstore()).await.expect("index");

    let mut sorted = receipt.point_ids.clone();
    sorted.sort();
    assert_eq!(receipt.point_ids, sorted);
    assert_eq!(receipt.points_upserted, 3);
}

#[tokio::test]
async fn test_reindexing_unchanged_descriptor_is_idempotent() {
    let h = Harness::new().await;

    let first = h.indexing.index_service(&petstore()).await.expect("index");
    let second = h.indexing.index_service(&petstore()).await.expect("index");

    assert_eq!(first.point_ids, second.point_ids);
    assert_eq!(h.point_count().await, 3);
}

#[tokio::test]
async fn test_sequential_and_parallel_indexing_agree() {
    let sequential = Harness::with(
        Arc::new(scb_providers::embedding::NullEmbeddingProvider::new()),
        IndexingOptions::default().with_workers(1),
        SearchOptions::default(),
    )
    .await;
    let parallel = Harness::with(
        Arc::new(scb_providers::embedding::NullEmbeddingProvider::new()),
        IndexingOptions::default().with_workers(8),
        SearchOptions::default(),
    )
    .await;

    let a = sequential.indexing.index_service(&petstore()).await.expect("index");
    let b = parallel.indexing.index_service(&petstore()).await.expect("index");

    assert_eq!(a, b);
}

fn wide_service(capabilities: usize) -> ServiceDescriptor {
    (0..capabilities).fold(ServiceDescriptor::new("wide", "Wide"), |service, n| {
        service.with_capability(
            format!("GET /items/{n}"),
            format!("fetch item number {n}"),
            format!("http://h/items/{n}"),
        )
    })
}

#[tokio::test(start_paused = true)]
async fn test_worker_budget_bounds_embeddings_in_flight() {
    for workers in [1, 3] {
        let tracker = Arc::new(TrackingEmbeddingProvider::sleeping(Duration::from_millis(50)));
        let h = Harness::with(
            tracker.clone(),
            IndexingOptions::default().with_workers(workers),
            SearchOptions::default(),
        )
        .await;

        let receipt = h.indexing.index_service(&wide_service(8)).await.expect("index");

        assert_eq!(receipt.points_upserted, 8);
        assert_eq!(tracker.peak(), workers, "workers = {workers}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_blocking_embedder_runs_on_parallel_workers() {
    let tracker = Arc::new(TrackingEmbeddingProvider::blocking(Duration::from_millis(200)));
    let h = Harness::with(
        tracker.clone(),
        IndexingOptions::default().with_workers(4),
        SearchOptions::default(),
    )
    .await;
    let started = std::time::Instant::now();

    let receipt = h.indexing.index_service(&wide_service(4)).await.expect("index");

    assert_eq!(receipt.points_upserted, 4);
    assert!(tracker.peak() > 1, "peak = {}", tracker.peak());
    assert!(started.elapsed() < Duration::from_millis(750));
}

#[tokio::test]
async fn test_identical_text_in_two_services_keeps_last_writer() {
    let h = Harness::new().await;
    let first = ServiceDescriptor::new("first", "First")
        .with_capability("GET /a", "send an email", "http://first/a");
    let second = ServiceDescriptor::new("second", "Second")
        .with_capability("POST /b", "send an email", "http://second/b");

    h.indexing.index_service(&first).await.expect("index first");
    h.indexing.index_service(&second).await.expect("index second");

    assert_eq!(h.point_count().await, 1);
    let points = h
        .index
        .get_points(&[derive_point_id("send an email")]);
    assert_eq!(points[0].payload.service_id, "second");
    assert_eq!(points[0].payload.operation_key, "POST /b");

    let views = h.search.search("send an email", 5).await.expect("search");
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].service_id, "second");
}

#[tokio::test]
async fn test_embedding_failure_writes_nothing() {
    let provider = Arc::new(FlakyEmbeddingProvider::failing_on_call(2));
    let h = Harness::with_embedding(provider.clone()).await;

    let err = h
        .indexing
        .index_service(&petstore())
        .await
        .expect_err("second embedding fails");

    assert!(err.is_embedding_failure());
    assert!(provider.calls() >= 2);
    assert_eq!(h.point_count().await, 0);
    assert!(h.store.get("petstore").await.expect("get").is_none());
}

#[tokio::test]
async fn test_embedding_failure_keeps_previous_state() {
    let provider = Arc::new(FlakyEmbeddingProvider::failing_on_call(2));
    let h = Harness::with_embedding(provider).await;

    // First call embeds one capability successfully
    h.indexing.index_service(&svc1()).await.expect("index");
    let err = h.indexing.index_service(&petstore()).await.expect_err("fails");

    assert!(err.is_embedding_failure());
    assert_eq!(h.point_count().await, 1);
    assert!(h.store.get("petstore").await.expect("get").is_none());
    assert!(h.store.get("svc1").await.expect("get").is_some());
}

#[tokio::test(start_paused = true)]
async fn test_embedding_timeout_is_an_embedding_failure() {
    let h = Harness::with(
        Arc::new(SlowEmbeddingProvider::new(Duration::from_secs(60))),
        IndexingOptions::default().with_embed_timeout(Duration::from_secs(1)),
        SearchOptions::default(),
    )
    .await;

    let err = h.indexing.index_service(&svc1()).await.expect_err("timeout");

    assert!(err.is_embedding_failure());
    assert!(err.to_string().contains("timed out"));
    assert_eq!(h.point_count().await, 0);
    assert!(h.store.get("svc1").await.expect("get").is_none());
}

#[tokio::test]
async fn test_wrong_embedding_dimension_is_an_embedding_failure() {
    let h = Harness::with_embedding(Arc::new(MisreportingEmbeddingProvider::new())).await;

    let err = h.indexing.index_service(&svc1()).await.expect_err("mismatch");

    assert!(err.is_embedding_failure());
    assert_eq!(h.point_count().await, 0);
}

#[tokio::test]
async fn test_descriptor_without_capabilities_is_stored_only() {
    let h = Harness::new().await;
    let bare = ServiceDescriptor::new("bare", "Bare");

    let receipt = h.indexing.index_service(&bare).await.expect("index");

    assert_eq!(receipt.points_upserted, 0);
    assert!(receipt.point_ids.is_empty());
    assert_eq!(h.point_count().await, 0);
    assert!(h.store.get("bare").await.expect("get").is_some());
}

#[tokio::test]
async fn test_missing_id_is_a_validation_error() {
    let h = Harness::new().await;
    let nameless = ServiceDescriptor::new("  ", "Nameless")
        .with_capability("GET /x", "fetch x", "http://h/x");

    let err = h.indexing.index_service(&nameless).await.expect_err("no id");

    assert!(err.is_validation());
    assert_eq!(err.http_status(), 400);
    assert_eq!(h.point_count().await, 0);
}

#[tokio::test]
async fn test_reindex_with_removed_capability_leaves_stale_vector() {
    let h = Harness::new().await;
    h.indexing.index_service(&petstore()).await.expect("index");

    let mut trimmed = petstore();
    trimmed.capabilities.remove("DELETE /orders/{id}");
    trimmed.endpoints.remove("DELETE /orders/{id}");
    let receipt = h.indexing.index_service(&trimmed).await.expect("reindex");

    assert_eq!(receipt.points_upserted, 2);
    // Known gap: the removed capability's point is not deleted
    assert_eq!(h.point_count().await, 3);
    let stale = h
        .index
        .get_points(&[derive_point_id("cancel an order")]);
    assert_eq!(stale.len(), 1);

    // The stale point can no longer be resolved to a view
    let views = h.search.search("cancel an order", 1).await.expect("search");
    assert!(views.is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let h = Harness::new().await;
    h.indexing.index_service(&svc1()).await.expect("index");

    h.indexing.delete_service("svc1").await.expect("delete");
    let err = h.catalog.get_service("svc1").await.expect_err("gone");

    assert!(err.is_not_found());
    assert_eq!(err.http_status(), 404);
    // Vector points are orphaned, not removed
    assert_eq!(h.point_count().await, 1);
}

#[tokio::test]
async fn test_delete_unknown_service_is_not_found() {
    let h = Harness::new().await;
    let err = h.indexing.delete_service("ghost").await.expect_err("absent");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_indexing_options_defaults() {
    let options = IndexingOptions::default();
    assert_eq!(options.workers, 4);
    assert_eq!(options.embed_timeout, Duration::from_secs(30));
    assert_eq!(options.query_prefix, "query: ");
}
