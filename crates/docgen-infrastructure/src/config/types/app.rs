//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{
    ExtractionConfig, HistoryConfig, LoggingConfig, ServerConfig, SummarizationConfig,
};

/// Root configuration
///
/// Every section falls back to its defaults when absent from all sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Summarization adapter selection and settings
    pub summarization: SummarizationConfig,
    /// History store selection
    pub history: HistoryConfig,
    /// Entity extraction
    pub extraction: ExtractionConfig,
}
