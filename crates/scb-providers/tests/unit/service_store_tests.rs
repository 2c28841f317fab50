//! Canonical service store behaviour, shared across implementations

use scb_domain::entities::ServiceDescriptor;
use scb_domain::ports::providers::ServiceStoreProvider;
use scb_providers::service_store::{FilesystemServiceStoreProvider, InMemoryServiceStoreProvider};

fn petstore() -> ServiceDescriptor {
    ServiceDescriptor::new("petstore", "Petstore")
        .with_description("Pets API")
        .with_capability("GET /pets", "List all pets", "http://pets.local/pets")
}

async fn exercise_store(store: &dyn ServiceStoreProvider) {
    assert!(store.get("petstore").await.expect("get").is_none());
    assert!(store.list().await.expect("list").is_empty());

    store.put(&petstore()).await.expect("put");
    assert_eq!(store.get("petstore").await.expect("get"), Some(petstore()));

    // Replace wholesale
    let replaced = ServiceDescriptor::new("petstore", "Petstore v2");
    store.put(&replaced).await.expect("put");
    let stored = store.get("petstore").await.expect("get").expect("present");
    assert_eq!(stored.name, "Petstore v2");
    assert!(stored.capabilities.is_empty());

    store
        .put(&ServiceDescriptor::new("weather", "Weather"))
        .await
        .expect("put");
    assert_eq!(store.list().await.expect("list").len(), 2);

    assert!(store.delete("petstore").await.expect("delete"));
    assert!(!store.delete("petstore").await.expect("delete again"));
    assert!(store.get("petstore").await.expect("get").is_none());
}

#[tokio::test]
async fn test_in_memory_store_contract() {
    let store = InMemoryServiceStoreProvider::new();
    exercise_store(&store).await;
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_filesystem_store_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FilesystemServiceStoreProvider::new(dir.path().join("services"));
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_filesystem_store_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let descriptor = ServiceDescriptor::new("ns/with.dots", "Odd id")
        .with_capability("POST /x", "create x", "http://h/x");

    FilesystemServiceStoreProvider::new(dir.path())
        .put(&descriptor)
        .await
        .expect("put");

    let reopened = FilesystemServiceStoreProvider::new(dir.path());
    assert_eq!(
        reopened.get("ns/with.dots").await.expect("get"),
        Some(descriptor)
    );
    assert_eq!(reopened.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_filesystem_store_keeps_unmodelled_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FilesystemServiceStoreProvider::new(dir.path());
    let descriptor: ServiceDescriptor = serde_json::from_value(serde_json::json!({
        "id": "svc1",
        "name": "Svc",
        "owner": "team-a",
        "capabilities": {"GET /x": "fetch x"},
        "endpoints": {"GET /x": "http://h/x"}
    }))
    .expect("descriptor");

    store.put(&descriptor).await.expect("put");
    let stored = store.get("svc1").await.expect("get").expect("present");
    assert_eq!(stored.extra["owner"], "team-a");
}

#[tokio::test]
async fn test_filesystem_list_skips_unreadable_documents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FilesystemServiceStoreProvider::new(dir.path());
    store.put(&petstore()).await.expect("put");
    std::fs::write(dir.path().join("broken.json"), "{ not json").expect("write");

    let listed = store.list().await.expect("list");

    assert_eq!(listed, vec![petstore()]);
    assert!(store.get("broken").await.is_err());
}

#[tokio::test]
async fn test_put_rejects_empty_id() {
    let store = InMemoryServiceStoreProvider::new();
    let err = store
        .put(&ServiceDescriptor::new("", "nameless"))
        .await
        .expect_err("empty id");
    assert!(err.is_validation());
}
