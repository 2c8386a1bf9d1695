//! Hugging Face Summarization Adapter
//!
//! Implements the SummarizationProvider port against the Hugging Face
//! inference protocol (hosted Inference API or a self-hosted endpoint
//! exposing `POST /models/{model}`). The default model is the CodeT5
//! multilingual code summarization checkpoint, which takes raw code as input.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use docgen_domain::constants::DEFAULT_SUMMARIZATION_MODEL;
use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::SummarizationProvider;
use docgen_domain::value_objects::{DecodingPreset, Verbosity};

use super::helpers::{finish_summary, generation_parameters};
use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "huggingface";

/// Hugging Face summarization adapter
///
/// Receives HTTP client via constructor injection.
pub struct HuggingFaceSummarizer {
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl HuggingFaceSummarizer {
    /// Create a new Hugging Face adapter
    ///
    /// # Arguments
    /// * `base_url` - Inference server URL (e.g., "https://api-inference.huggingface.co")
    /// * `model` - Model repository id (e.g., "Salesforce/codet5-base-multi-sum")
    /// * `api_key` - Optional bearer token
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            timeout,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), self.model)
    }

    async fn fetch_summary(&self, source_text: &str, preset: &DecodingPreset) -> Result<Value> {
        let payload = serde_json::json!({
            "inputs": source_text,
            "parameters": generation_parameters(preset),
            "options": { "wait_for_model": true }
        });

        let mut request = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(PROVIDER_NAME, self.timeout, e))?;

        HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await
    }

    /// Parse the generated text from an inference response
    ///
    /// Accepts `[{"summary_text": ..}]`, `[{"generated_text": ..}]` and the
    /// same objects without the surrounding array.
    pub fn parse_summary(response: &Value) -> Result<String> {
        let item = match response {
            Value::Array(items) => items.first().unwrap_or(&Value::Null),
            other => other,
        };

        let text = item
            .get("summary_text")
            .or_else(|| item.get("generated_text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::summarization(format!(
                    "{PROVIDER_NAME} invalid response format: missing summary_text"
                ))
            })?;

        finish_summary(PROVIDER_NAME, text)
    }
}

#[async_trait]
impl SummarizationProvider for HuggingFaceSummarizer {
    async fn summarize(&self, source_text: &str, verbosity: Verbosity) -> Result<String> {
        let preset = verbosity.preset();
        debug!(model = %self.model, %verbosity, chars = source_text.len(), "Requesting summary");
        let response = self.fetch_summary(source_text, &preset).await?;
        Self::parse_summary(&response)
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
use crate::constants::HUGGINGFACE_DEFAULT_BASE_URL;

/// Factory function for creating Hugging Face adapter instances.
fn huggingface_factory(
    config: &SummarizationProviderConfig,
) -> std::result::Result<Arc<dyn SummarizationProvider>, String> {
    let base_url =
        constructor::get_effective_url(config.base_url.as_deref(), HUGGINGFACE_DEFAULT_BASE_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_SUMMARIZATION_MODEL.to_string());
    let api_key = constructor::validate_api_key(config.api_key.as_deref());
    let timeout = effective_timeout(config.timeout_secs);
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(HuggingFaceSummarizer::new(
        base_url,
        model,
        api_key,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(SUMMARIZATION_PROVIDERS)]
static HUGGINGFACE_PROVIDER: SummarizationProviderEntry = SummarizationProviderEntry {
    name: "huggingface",
    description: "Hugging Face inference API (Salesforce/codet5-base-multi-sum by default)",
    factory: huggingface_factory,
};
