//! Common helpers for summarization adapters

use std::time::Duration;

use docgen_domain::error::{Error, Result};
use docgen_domain::value_objects::DecodingPreset;
use reqwest::Client;
use serde_json::{Map, Value, json};

use crate::constants::DEFAULT_MODEL_TIMEOUT_SECS;

/// Common constructor patterns used by adapters
pub mod constructor {
    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_url.to_string())
    }

    /// Trimmed API key, `None` when blank
    pub fn validate_api_key(api_key: Option<&str>) -> Option<String> {
        api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

/// Effective request timeout
pub fn effective_timeout(timeout_secs: Option<u64>) -> Duration {
    Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS))
}

/// Build the HTTP client used by an adapter factory
pub fn build_http_client(timeout: Duration) -> std::result::Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}

/// Generation parameters of a preset in Hugging Face naming
///
/// Parameters that would be no-ops (`no_repeat_ngram_size` 0, `repetition_penalty` 1.0)
/// are left out.
pub fn generation_parameters(preset: &DecodingPreset) -> Value {
    let mut params = Map::new();
    params.insert("max_length".into(), json!(preset.max_length));
    params.insert("min_length".into(), json!(preset.min_length));
    params.insert("num_beams".into(), json!(preset.num_beams));
    params.insert("length_penalty".into(), json!(preset.length_penalty));
    params.insert("early_stopping".into(), json!(preset.early_stopping));
    if preset.no_repeat_ngram_size > 0 {
        params.insert(
            "no_repeat_ngram_size".into(),
            json!(preset.no_repeat_ngram_size),
        );
    }
    if preset.repetition_penalty > 1.0 {
        params.insert(
            "repetition_penalty".into(),
            json!(preset.repetition_penalty),
        );
    }
    Value::Object(params)
}

/// Clean a generated summary, rejecting empty output
pub fn finish_summary(provider: &str, text: &str) -> Result<String> {
    let summary = text.trim();
    if summary.is_empty() {
        return Err(Error::summarization(format!(
            "{provider} returned an empty summary"
        )));
    }
    Ok(summary.to_string())
}
