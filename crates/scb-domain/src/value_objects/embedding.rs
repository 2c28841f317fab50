//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A vector embedding of text content. Providers are expected to return
/// unit-normalized vectors whose length equals the provider's declared
/// dimensions.
///
/// ## Example
///
/// ```rust
/// use scb_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.6, 0.8],
///     model: "null".to_string(),
///     dimensions: 2,
/// };
/// assert!(embedding.is_unit_normalized(1e-6));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// L2 norm of the vector
    pub fn norm(&self) -> f32 {
        self.vector.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Whether the vector has unit length within `tolerance`
    pub fn is_unit_normalized(&self, tolerance: f32) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }
}
