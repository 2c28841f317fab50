//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.

use reqwest::Response;
use scb_domain::error::{Error, Result};

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// Non-success statuses and unparsable bodies become embedding errors
    /// naming `provider_name`.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                404 => embedding_error(provider_name, "model or endpoint not found", &error_text),
                429 => embedding_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => embedding_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => embedding_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }
}
