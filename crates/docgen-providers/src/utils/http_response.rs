//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from model APIs.
//! These are shared utilities, not ports.

use std::time::Duration;

use docgen_domain::error::{Error, Result};
use reqwest::Response;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Format error message for summarization provider
fn summarization_error(provider: &str, context: &str, details: &str) -> Error {
    Error::summarization(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
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
                401 | 403 => summarization_error(provider_name, "authentication failed", &error_text),
                404 => summarization_error(provider_name, "model not found", &error_text),
                429 => summarization_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => summarization_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => summarization_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| summarization_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a transport failure to a summarization error
    pub fn request_error(provider_name: &str, timeout: Duration, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::summarization(format!(
                "{provider_name} {ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"
            ))
        } else {
            summarization_error(provider_name, "HTTP request failed", &err.to_string())
        }
    }
}
