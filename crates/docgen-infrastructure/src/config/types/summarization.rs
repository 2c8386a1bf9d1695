//! Summarization adapter configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUMMARIZATION_PROVIDER, DEFAULT_SUMMARIZATION_TIMEOUT_SECS};

/// Summarization adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationConfig {
    /// Registered adapter name ("huggingface", "ollama", "null")
    pub provider: String,
    /// Model identifier; the adapter's default when unset
    pub model: Option<String>,
    /// Model server URL; the adapter's default when unset
    pub base_url: Option<String>,
    /// Bearer token for hosted inference
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Check the model before serving; failure aborts startup
    pub verify_on_startup: bool,
    /// Allow at most one model call at a time across the process
    pub serialize_inference: bool,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_SUMMARIZATION_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            timeout_secs: DEFAULT_SUMMARIZATION_TIMEOUT_SECS,
            verify_on_startup: true,
            serialize_inference: true,
        }
    }
}
