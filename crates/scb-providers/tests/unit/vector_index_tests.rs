//! In-memory and null vector index behaviour

use scb_domain::ports::providers::VectorIndexProvider;
use scb_domain::value_objects::{PointPayload, VectorPoint};
use scb_providers::vector_index::{InMemoryVectorIndexProvider, NullVectorIndexProvider};

fn point(id: &str, vector: Vec<f32>, service: &str, op: &str) -> VectorPoint {
    VectorPoint::new(id, vector, PointPayload::new(service, op))
}

async fn ready_index() -> InMemoryVectorIndexProvider {
    let index = InMemoryVectorIndexProvider::new();
    index.ensure_collection(2).await.expect("create collection");
    index
}

#[tokio::test]
async fn test_search_ranks_by_cosine_descending() {
    let index = ready_index().await;
    index
        .upsert(&[
            point("a", vec![1.0, 0.0], "svc", "GET /a"),
            point("b", vec![0.0, 1.0], "svc", "GET /b"),
            point("c", vec![0.7071, 0.7071], "svc", "GET /c"),
        ])
        .await
        .expect("upsert");

    let hits = index.search(&[1.0, 0.0], 3).await.expect("search");
    let ids: Vec<&str> = hits.iter().map(|h| h.point_id.as_str()).collect();

    assert_eq!(ids, vec!["a", "c", "b"]);
    assert!((hits[0].score - 1.0).abs() < 1e-4);
    assert!(hits[0].score >= hits[1].score && hits[1].score >= hits[2].score);
}

#[tokio::test]
async fn test_search_respects_limit() {
    let index = ready_index().await;
    index
        .upsert(&[
            point("a", vec![1.0, 0.0], "svc", "GET /a"),
            point("b", vec![0.0, 1.0], "svc", "GET /b"),
        ])
        .await
        .expect("upsert");

    assert_eq!(index.search(&[1.0, 0.0], 1).await.expect("search").len(), 1);
    assert!(index.search(&[1.0, 0.0], 0).await.expect("search").is_empty());
}

#[tokio::test]
async fn test_upsert_overwrites_by_point_id() {
    let index = ready_index().await;
    index
        .upsert(&[point("same", vec![1.0, 0.0], "first", "GET /x")])
        .await
        .expect("upsert");
    index
        .upsert(&[point("same", vec![1.0, 0.0], "second", "GET /y")])
        .await
        .expect("upsert");

    assert_eq!(index.count().await.expect("count"), 1);
    let stored = index.get_points(&["same".to_string()]);
    assert_eq!(stored[0].payload.service_id, "second");
}

#[tokio::test]
async fn test_upsert_rejects_whole_batch_on_bad_point() {
    let index = ready_index().await;
    let result = index
        .upsert(&[
            point("good", vec![1.0, 0.0], "svc", "GET /a"),
            point("bad", vec![1.0, 0.0, 0.0], "svc", "GET /b"),
        ])
        .await;

    assert!(result.expect_err("dimension mismatch").is_backend_unavailable());
    assert_eq!(index.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_upsert_rejects_empty_payload_fields() {
    let index = ready_index().await;
    let result = index.upsert(&[point("p", vec![1.0, 0.0], "", "GET /a")]).await;
    assert!(result.is_err());
    assert_eq!(index.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_upsert_requires_collection() {
    let index = InMemoryVectorIndexProvider::new();
    let result = index.upsert(&[point("p", vec![1.0], "svc", "GET /a")]).await;
    assert!(result.is_err());
    assert!(index.search(&[1.0], 5).await.expect("search").is_empty());
}

#[tokio::test]
async fn test_ensure_collection_is_idempotent_but_checks_dimensions() {
    let index = ready_index().await;
    assert!(index.ensure_collection(2).await.is_ok());
    assert!(index.ensure_collection(3).await.is_err());
}

#[tokio::test]
async fn test_get_points_ignores_unknown_ids() {
    let index = ready_index().await;
    index
        .upsert(&[point("a", vec![1.0, 0.0], "svc", "GET /a")])
        .await
        .expect("upsert");

    let found = index
        .get_points(&["a".to_string(), "missing".to_string()]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

#[tokio::test]
async fn test_null_index_discards_points() {
    let index = NullVectorIndexProvider::new();
    index.ensure_collection(2).await.expect("ensure");
    index
        .upsert(&[point("a", vec![1.0, 0.0], "svc", "GET /a")])
        .await
        .expect("upsert");

    assert_eq!(index.count().await.expect("count"), 0);
    assert!(index.search(&[1.0, 0.0], 5).await.expect("search").is_empty());
    assert_eq!(index.provider_name(), "null");
}

mod filesystem {
    use super::point;
    use scb_domain::ports::providers::VectorIndexProvider;
    use scb_providers::vector_index::FilesystemVectorIndexProvider;

    #[tokio::test]
    async fn test_points_survive_a_new_instance() {
        let dir = tempfile::tempdir().expect("tempdir");

        let first = FilesystemVectorIndexProvider::new(dir.path(), "services");
        first.ensure_collection(2).await.expect("create collection");
        first
            .upsert(&[
                point("a", vec![1.0, 0.0], "svc", "GET /a"),
                point("b", vec![0.0, 1.0], "svc", "GET /b"),
            ])
            .await
            .expect("upsert");
        assert!(first.snapshot_path().exists());

        let second = FilesystemVectorIndexProvider::new(dir.path(), "services");
        second.ensure_collection(2).await.expect("load collection");
        assert_eq!(second.count().await.expect("count"), 2);

        let hits = second.search(&[1.0, 0.0], 1).await.expect("search");
        assert_eq!(hits[0].point_id, "a");
        assert_eq!(hits[0].payload.operation_key, "GET /a");
    }

    #[tokio::test]
    async fn test_dimension_change_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");

        let first = FilesystemVectorIndexProvider::new(dir.path(), "services");
        first.ensure_collection(2).await.expect("create collection");

        let second = FilesystemVectorIndexProvider::new(dir.path(), "services");
        assert!(second.ensure_collection(3).await.is_err());
    }

    #[tokio::test]
    async fn test_collections_use_separate_files() {
        let dir = tempfile::tempdir().expect("tempdir");

        let a = FilesystemVectorIndexProvider::new(dir.path(), "alpha");
        a.ensure_collection(2).await.expect("create alpha");
        a.upsert(&[point("x", vec![1.0, 0.0], "svc", "GET /x")])
            .await
            .expect("upsert");

        let b = FilesystemVectorIndexProvider::new(dir.path(), "beta");
        b.ensure_collection(2).await.expect("create beta");
        assert_eq!(b.count().await.expect("count"), 0);
        assert_ne!(a.snapshot_path(), b.snapshot_path());
    }
}
