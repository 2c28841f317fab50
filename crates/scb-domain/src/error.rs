//! Error handling types
//!
//! The variants split into two groups. The catalog taxonomy
//! (`InvalidArgument`, `Embedding`, `VectorIndex`, `ServiceStore`, `NotFound`)
//! is what callers branch on; the remaining variants carry ambient failures
//! (configuration, I/O, serialization) raised by the outer layers.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Service Capability Browser
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed input (caller error, do not retry)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Embedding backend failed or timed out
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding provider error
        message: String,
    },

    /// Vector index backend unreachable or rejected the operation
    #[error("Vector index error: {message}")]
    VectorIndex {
        /// Description of the vector index error
        message: String,
    },

    /// Canonical service store unreachable or rejected the operation
    #[error("Service store error: {message}")]
    ServiceStore {
        /// Description of the service store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Catalog error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a vector index error
    pub fn vector_index<S: Into<String>>(message: S) -> Self {
        Self::VectorIndex {
            message: message.into(),
        }
    }

    /// Create a service store error
    pub fn service_store<S: Into<String>>(message: S) -> Self {
        Self::ServiceStore {
            message: message.into(),
            source: None,
        }
    }

    /// Create a service store error with source
    pub fn service_store_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::ServiceStore {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Classification used by outer layers (HTTP front door, CLI exit codes)
impl Error {
    /// Caller supplied a missing or malformed field
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Direct lookup found nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Embedding batch failed; the whole call may be retried
    pub fn is_embedding_failure(&self) -> bool {
        matches!(self, Self::Embedding { .. })
    }

    /// One of the two stores is unreachable
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::VectorIndex { .. } | Self::ServiceStore { .. })
    }

    /// HTTP status a front door should answer with for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArgument { .. } | Self::Json { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::VectorIndex { .. } | Self::ServiceStore { .. } => 503,
            _ => 500,
        }
    }
}
