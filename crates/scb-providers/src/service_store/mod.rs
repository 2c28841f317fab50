//! Service Store Provider Implementations
//!
//! Canonical stores for service descriptors.
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryServiceStoreProvider | Local | Concurrent map (non-persistent) |
//! | FilesystemServiceStoreProvider | Local | One JSON document per service id |

#[cfg(feature = "servicestore-filesystem")]
pub mod filesystem;
#[cfg(feature = "servicestore-memory")]
pub mod in_memory;

#[cfg(feature = "servicestore-filesystem")]
pub use filesystem::FilesystemServiceStoreProvider;
#[cfg(feature = "servicestore-memory")]
pub use in_memory::InMemoryServiceStoreProvider;
