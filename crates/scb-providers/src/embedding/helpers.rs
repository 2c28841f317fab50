//! Common helpers for embedding providers
//!
//! Shared functionality used across the HTTP and local embedding providers.

use std::time::Duration;

use crate::constants::EMBEDDING_REQUEST_TIMEOUT_SECS;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    use std::time::Duration;

    /// Get effective URL with fallback to default, without a trailing slash
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default_url)
            .trim_end_matches('/')
            .to_string()
    }

    /// Effective request timeout, falling back to the provider default
    pub fn get_effective_timeout(timeout_secs: Option<u64>) -> Duration {
        timeout_secs
            .filter(|secs| *secs > 0)
            .map_or(super::DEFAULT_EMBEDDING_TIMEOUT, Duration::from_secs)
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(EMBEDDING_REQUEST_TIMEOUT_SECS);

/// Scale a vector to unit length in place; zero vectors are left untouched
pub fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|x| *x /= norm);
    }
}
