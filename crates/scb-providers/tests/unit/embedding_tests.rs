//! Null embedding provider behaviour

use scb_domain::ports::providers::EmbeddingProvider;
use scb_providers::embedding::NullEmbeddingProvider;

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[tokio::test]
async fn test_null_embeddings_are_deterministic_and_unit_length() {
    let provider = NullEmbeddingProvider::new();

    let first = provider.embed("query: list all pets").await.expect("embed");
    let second = provider.embed("query: list all pets").await.expect("embed");

    assert_eq!(first.vector, second.vector);
    assert_eq!(first.dimensions, provider.dimensions());
    assert!(first.is_unit_normalized(1e-5));
}

#[tokio::test]
async fn test_null_embeddings_rank_shared_words_higher() {
    let provider = NullEmbeddingProvider::new();

    let query = provider.embed("query: fetch pets").await.expect("embed");
    let near = provider.embed("query: fetch all pets").await.expect("embed");
    let far = provider.embed("query: delete invoices").await.expect("embed");

    assert!(cosine(&query.vector, &near.vector) > cosine(&query.vector, &far.vector));
}

#[tokio::test]
async fn test_null_embedding_batch_keeps_input_order() {
    let provider = NullEmbeddingProvider::with_dimensions(32);
    let texts = vec!["alpha".to_string(), "beta".to_string()];

    let batch = provider.embed_batch(&texts).await.expect("batch");
    let alpha = provider.embed("alpha").await.expect("embed");

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].vector, alpha.vector);
    assert_eq!(batch[1].dimensions, 32);
}

#[tokio::test]
async fn test_null_embedding_of_empty_text_is_still_unit_length() {
    let provider = NullEmbeddingProvider::new();
    let embedding = provider.embed("").await.expect("embed");
    assert!(embedding.is_unit_normalized(1e-5));
}

#[tokio::test]
async fn test_null_embedding_health_check() {
    assert!(NullEmbeddingProvider::new().health_check().await.is_ok());
}
