//! Filesystem service store provider
//!
//! Persists each canonical descriptor as one pretty-printed JSON document
//! in a directory. Writes go to a temporary file first and are renamed into
//! place, so a reader never observes a half-written document.

use async_trait::async_trait;
use scb_domain::entities::ServiceDescriptor;
use scb_domain::error::{Error, Result};
use scb_domain::ports::providers::ServiceStoreProvider;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use crate::constants::SERVICE_DOCUMENT_EXTENSION;

/// Filesystem service store provider
///
/// The directory is created on the first write. Ids are percent-encoded
/// into file names, so any id string is accepted.
#[derive(Debug, Clone)]
pub struct FilesystemServiceStoreProvider {
    base_path: PathBuf,
}

impl FilesystemServiceStoreProvider {
    /// Create a store rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Directory holding the documents
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.{SERVICE_DOCUMENT_EXTENSION}", encode_file_stem(id)))
    }

    async fn read_document(path: &Path) -> Result<Option<ServiceDescriptor>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::service_store_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };
        serde_json::from_str(&content).map(Some).map_err(|e| {
            Error::service_store_with_source(format!("Failed to parse {}", path.display()), e)
        })
    }
}

/// Percent-encode every byte outside `[A-Za-z0-9_-]`
fn encode_file_stem(id: &str) -> String {
    let mut encoded = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[async_trait]
impl ServiceStoreProvider for FilesystemServiceStoreProvider {
    async fn get(&self, id: &str) -> Result<Option<ServiceDescriptor>> {
        Self::read_document(&self.document_path(id)).await
    }

    async fn put(&self, descriptor: &ServiceDescriptor) -> Result<()> {
        if descriptor.id.is_empty() {
            return Err(Error::invalid_argument("Missing 'id' field"));
        }
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| {
                Error::service_store_with_source(
                    format!("Failed to create {}", self.base_path.display()),
                    e,
                )
            })?;

        let path = self.document_path(&descriptor.id);
        let tmp_path = path.with_extension(format!("{SERVICE_DOCUMENT_EXTENSION}.tmp"));
        let content = serde_json::to_vec_pretty(descriptor)?;

        tokio::fs::write(&tmp_path, content).await.map_err(|e| {
            Error::service_store_with_source(format!("Failed to write {}", tmp_path.display()), e)
        })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            Error::service_store_with_source(format!("Failed to replace {}", path.display()), e)
        })
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let path = self.document_path(id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::service_store_with_source(
                format!("Failed to delete {}", path.display()),
                e,
            )),
        }
    }

    async fn list(&self) -> Result<Vec<ServiceDescriptor>> {
        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::service_store_with_source(
                    format!("Failed to list {}", self.base_path.display()),
                    e,
                ));
            }
        };

        let mut services = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            Error::service_store_with_source(
                format!("Failed to list {}", self.base_path.display()),
                e,
            )
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SERVICE_DOCUMENT_EXTENSION) {
                continue;
            }
            match Self::read_document(&path).await {
                Ok(Some(service)) => services.push(service),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable service document"),
            }
        }
        Ok(services)
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use scb_application::ports::registry::{
    SERVICE_STORE_PROVIDERS, ServiceStoreProviderConfig, ServiceStoreProviderEntry,
};

fn filesystem_service_store_factory(
    config: &ServiceStoreProviderConfig,
) -> std::result::Result<Arc<dyn ServiceStoreProvider>, String> {
    let path = config
        .path
        .clone()
        .ok_or_else(|| "Filesystem service store requires a path".to_string())?;
    Ok(Arc::new(FilesystemServiceStoreProvider::new(path)))
}

#[linkme::distributed_slice(SERVICE_STORE_PROVIDERS)]
static FILESYSTEM_PROVIDER: ServiceStoreProviderEntry = ServiceStoreProviderEntry {
    name: "filesystem",
    description: "Filesystem service store (one JSON document per service)",
    factory: filesystem_service_store_factory,
};
