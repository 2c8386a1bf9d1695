use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Verbosity;

/// Source summarized to check a model during startup
pub const HEALTH_CHECK_SNIPPET: &str = "def ping():\n    return True";

/// Code Summarization Interface
///
/// Wraps an external pretrained sequence-to-sequence model. Given the raw
/// source text of one entity and a verbosity preset, returns one
/// natural-language summary. Implementations perform no caching: identical
/// inputs re-invoke the model.
///
/// # Example
///
/// ```ignore
/// use docgen_domain::ports::SummarizationProvider;
/// use docgen_domain::Verbosity;
///
/// let summary = provider
///     .summarize("def add(a, b):\n    return a + b", Verbosity::Concise)
///     .await?;
/// ```
#[async_trait]
pub trait SummarizationProvider: Send + Sync {
    /// Summarize one entity's source text using the preset for `verbosity`
    async fn summarize(&self, source_text: &str, verbosity: Verbosity) -> Result<String>;

    /// Model identifier used by this provider
    fn model(&self) -> &str;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "huggingface", "ollama", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        // Default implementation - summarize a trivial snippet
        self.summarize(HEALTH_CHECK_SNIPPET, Verbosity::Concise)
            .await?;
        Ok(())
    }
}
