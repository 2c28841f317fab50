//! Vector Index Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullVectorIndexProvider | Testing | Discards points, never returns hits |
//! | InMemoryVectorIndexProvider | Local | Cosine top-K over a concurrent map (non-persistent) |
//! | FilesystemVectorIndexProvider | Local | In-memory search persisted as a JSON snapshot |

#[cfg(feature = "vectorindex-filesystem")]
pub mod filesystem;
#[cfg(feature = "vectorindex-memory")]
pub mod in_memory;
pub mod null;

#[cfg(feature = "vectorindex-filesystem")]
pub use filesystem::FilesystemVectorIndexProvider;
#[cfg(feature = "vectorindex-memory")]
pub use in_memory::InMemoryVectorIndexProvider;
pub use null::NullVectorIndexProvider;
