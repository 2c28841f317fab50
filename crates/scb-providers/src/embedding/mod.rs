//! Embedding Provider Implementations
//!
//! Converts text into unit-normalized vectors for capability search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Feature |
//! |----------|------|---------|
//! | NullEmbeddingProvider | Testing / offline | always |
//! | OllamaEmbeddingProvider | Local HTTP | `embedding-ollama` |
//! | FastEmbedProvider | Local ONNX | `embedding-fastembed` |

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod helpers;
pub mod null;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
