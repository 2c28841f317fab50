//! Error extension utilities
//!
//! Context extension methods for turning foreign errors (figment, io, toml,
//! tracing) into the catalog [`Error`].

use scb_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use scb_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read service file: {}", path.display()))?;
///
/// let config: AppConfig = figment.extract().config_context("Invalid configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to our domain Error type
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| to_domain_error(err, &context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| to_domain_error(err, &f().to_string()))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }
}

/// Convert a foreign error to an infrastructure error with context
pub fn to_domain_error<E>(error: E, context: &str) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::Infrastructure {
        message: format!("{context}: {error}"),
        source: Some(Box::new(error)),
    }
}
