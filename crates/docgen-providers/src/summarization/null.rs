//! Null summarization adapter for testing and development
//!
//! Produces deterministic summaries from the entity's first line. No model,
//! no network; always available.

use async_trait::async_trait;

use docgen_domain::error::Result;
use docgen_domain::ports::providers::SummarizationProvider;
use docgen_domain::value_objects::Verbosity;

use crate::constants::NULL_MODEL_NAME;

/// Null summarization adapter
///
/// # Example
///
/// ```rust
/// use docgen_providers::summarization::NullSummarizer;
/// use docgen_domain::ports::providers::SummarizationProvider;
///
/// let provider = NullSummarizer::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullSummarizer;

impl NullSummarizer {
    /// Create a new null adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummarizationProvider for NullSummarizer {
    async fn summarize(&self, source_text: &str, verbosity: Verbosity) -> Result<String> {
        let signature = source_text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .trim_end_matches(':');

        Ok(match verbosity {
            Verbosity::Concise => format!("Defines {signature}."),
            Verbosity::Detailed => format!(
                "Defines {signature}, spanning {} lines of source.",
                source_text.lines().count()
            ),
        })
    }

    fn model(&self) -> &str {
        NULL_MODEL_NAME
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use docgen_application::ports::registry::{
    SUMMARIZATION_PROVIDERS, SummarizationProviderConfig, SummarizationProviderEntry,
};

fn null_factory(
    _config: &SummarizationProviderConfig,
) -> std::result::Result<Arc<dyn SummarizationProvider>, String> {
    Ok(Arc::new(NullSummarizer::new()))
}

#[linkme::distributed_slice(SUMMARIZATION_PROVIDERS)]
static NULL_PROVIDER: SummarizationProviderEntry = SummarizationProviderEntry {
    name: "null",
    description: "Deterministic offline summaries (testing)",
    factory: null_factory,
};
