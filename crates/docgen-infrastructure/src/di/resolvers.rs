//! Provider resolvers
//!
//! Translate configuration sections into registry configs and resolve them
//! through the linkme registries.
//!
//! ```text
//! AppConfig section → *ProviderConfig → linkme registry → Arc<dyn Port>
//! ```

use std::sync::Arc;

use docgen_application::ports::registry::{
    ExtractionProviderConfig, HistoryProviderConfig, SummarizationProviderConfig,
    resolve_extraction_provider, resolve_history_provider, resolve_summarization_provider,
};
use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::{EntityExtractor, SummarizationProvider};
use docgen_domain::repositories::HistoryRepository;

use crate::config::{ExtractionConfig, HistoryConfig, SummarizationConfig};

/// Registry config for the summarization section
pub fn summarization_registry_config(config: &SummarizationConfig) -> SummarizationProviderConfig {
    let mut registry = SummarizationProviderConfig::new(config.provider.trim())
        .with_timeout_secs(config.timeout_secs);
    if let Some(model) = &config.model {
        registry = registry.with_model(model);
    }
    if let Some(base_url) = &config.base_url {
        registry = registry.with_base_url(base_url);
    }
    if let Some(api_key) = &config.api_key {
        registry = registry.with_api_key(api_key);
    }
    registry
}

/// Registry config for the history section
pub fn history_registry_config(config: &HistoryConfig) -> HistoryProviderConfig {
    HistoryProviderConfig::new(config.provider.trim()).with_path(&config.path)
}

/// Resolve the configured summarization adapter
pub fn resolve_summarizer(config: &SummarizationConfig) -> Result<Arc<dyn SummarizationProvider>> {
    resolve_summarization_provider(&summarization_registry_config(config)).map_err(Error::config)
}

/// Resolve the configured history store
pub fn resolve_history(config: &HistoryConfig) -> Result<Arc<dyn HistoryRepository>> {
    resolve_history_provider(&history_registry_config(config)).map_err(Error::config)
}

/// Resolve the extractor for the configured language
pub fn resolve_extractor(config: &ExtractionConfig) -> Result<Arc<dyn EntityExtractor>> {
    resolve_extraction_provider(&ExtractionProviderConfig::new(config.language.trim()))
        .map_err(Error::config)
}
