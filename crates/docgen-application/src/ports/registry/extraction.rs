//! Entity Extractor Registry
//!
//! Extractors register per source language; the configured language selects one.

use std::sync::Arc;

use docgen_domain::ports::providers::EntityExtractor;

/// Configuration for extractor selection
#[derive(Debug, Clone, Default)]
pub struct ExtractionProviderConfig {
    /// Source language (e.g., "python")
    pub language: String,
}

impl ExtractionProviderConfig {
    /// Create a new config for the given language
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

/// Registry entry for entity extractors
pub struct ExtractionProviderEntry {
    /// Language handled by the extractor (e.g., "python")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the extractor
    pub factory: fn(&ExtractionProviderConfig) -> Result<Arc<dyn EntityExtractor>, String>,
}

#[linkme::distributed_slice]
pub static EXTRACTION_PROVIDERS: [ExtractionProviderEntry] = [..];

/// Resolve the extractor for the configured language
pub fn resolve_extraction_provider(
    config: &ExtractionProviderConfig,
) -> Result<Arc<dyn EntityExtractor>, String> {
    let language = config.language.to_lowercase();

    for entry in EXTRACTION_PROVIDERS {
        if entry.name == language {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = EXTRACTION_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unsupported source language '{}'. Available extractors: {:?}",
        config.language, available
    ))
}

/// List all registered extractors as (language, description)
pub fn list_extraction_providers() -> Vec<(&'static str, &'static str)> {
    EXTRACTION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
