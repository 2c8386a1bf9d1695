//! Entity extraction configuration

use docgen_domain::constants::DEFAULT_SOURCE_LANGUAGE;
use serde::{Deserialize, Serialize};

/// Entity extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Source language of submitted documents
    pub language: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_SOURCE_LANGUAGE.to_string(),
        }
    }
}
