//! Summarization Provider Registry
//!
//! Auto-registration system for summarization adapters using linkme distributed slices.
//! Adapters register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use docgen_domain::ports::providers::SummarizationProvider;

/// Configuration for summarization adapter creation
///
/// Contains all configuration options that an adapter might need.
/// Adapters should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct SummarizationProviderConfig {
    /// Provider name (e.g., "huggingface", "ollama", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl SummarizationProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for summarization adapters
///
/// Each adapter registers itself with this entry using
/// `#[linkme::distributed_slice(SUMMARIZATION_PROVIDERS)]`.
pub struct SummarizationProviderEntry {
    /// Unique provider name (e.g., "huggingface", "ollama", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&SummarizationProviderConfig) -> Result<Arc<dyn SummarizationProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static SUMMARIZATION_PROVIDERS: [SummarizationProviderEntry] = [..];

/// Resolve summarization adapter by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn SummarizationProvider>)` - Created adapter instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_summarization_provider(
    config: &SummarizationProviderConfig,
) -> Result<Arc<dyn SummarizationProvider>, String> {
    let provider_name = &config.provider;

    for entry in SUMMARIZATION_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = SUMMARIZATION_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown summarization provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered summarization adapters as (name, description)
pub fn list_summarization_providers() -> Vec<(&'static str, &'static str)> {
    SUMMARIZATION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
