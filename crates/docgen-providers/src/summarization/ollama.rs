//! Ollama Summarization Adapter
//!
//! Implements the SummarizationProvider port using Ollama's local generate API.
//! Ollama models are instruction-tuned, so each request carries a system
//! instruction matching the verbosity preset.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::SummarizationProvider;
use docgen_domain::value_objects::Verbosity;

use super::helpers::finish_summary;
use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "ollama";

const CONCISE_INSTRUCTION: &str = "Summarize what the following code does in one short sentence. \
     Reply with the summary only.";

const DETAILED_INSTRUCTION: &str = "Explain what the following code does in a short paragraph: \
     its purpose, inputs and result. Do not repeat yourself. Reply with the explanation only.";

/// Ollama summarization adapter
///
/// Receives HTTP client via constructor injection.
pub struct OllamaSummarizer {
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaSummarizer {
    /// Create a new Ollama adapter
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "codellama")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, model: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// System instruction used for `verbosity`
    pub fn instruction(verbosity: Verbosity) -> &'static str {
        match verbosity {
            Verbosity::Concise => CONCISE_INSTRUCTION,
            Verbosity::Detailed => DETAILED_INSTRUCTION,
        }
    }
}

#[async_trait]
impl SummarizationProvider for OllamaSummarizer {
    async fn summarize(&self, source_text: &str, verbosity: Verbosity) -> Result<String> {
        let preset = verbosity.preset();
        let payload = serde_json::json!({
            "model": self.model,
            "system": Self::instruction(verbosity),
            "prompt": source_text,
            "stream": false,
            "options": {
                "num_predict": preset.max_length,
                "repeat_penalty": preset.repetition_penalty,
                "temperature": 0
            }
        });

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url.trim_end_matches('/')))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(PROVIDER_NAME, self.timeout, e))?;

        let data = HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await?;
        let text = data["response"].as_str().ok_or_else(|| {
            Error::summarization(format!(
                "{PROVIDER_NAME} invalid response format: missing response"
            ))
        })?;

        finish_summary(PROVIDER_NAME, text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use docgen_application::ports::registry::{
    SUMMARIZATION_PROVIDERS, SummarizationProviderConfig, SummarizationProviderEntry,
};

use super::helpers::{build_http_client, constructor, effective_timeout};
use crate::constants::{OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_MODEL};

/// Factory function for creating Ollama adapter instances.
fn ollama_factory(
    config: &SummarizationProviderConfig,
) -> std::result::Result<Arc<dyn SummarizationProvider>, String> {
    let base_url =
        constructor::get_effective_url(config.base_url.as_deref(), OLLAMA_DEFAULT_BASE_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string());
    let timeout = effective_timeout(config.timeout_secs);
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(OllamaSummarizer::new(
        base_url,
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(SUMMARIZATION_PROVIDERS)]
static OLLAMA_PROVIDER: SummarizationProviderEntry = SummarizationProviderEntry {
    name: "ollama",
    description: "Ollama local model server (codellama, etc.)",
    factory: ollama_factory,
};
