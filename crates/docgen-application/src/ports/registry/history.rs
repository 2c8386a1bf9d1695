//! History Store Registry
//!
//! Auto-registration system for history repositories.

use std::path::PathBuf;
use std::sync::Arc;

use docgen_domain::repositories::HistoryRepository;

/// Configuration for history store creation
#[derive(Debug, Clone, Default)]
pub struct HistoryProviderConfig {
    /// Provider name (e.g., "json_file", "memory")
    pub provider: String,
    /// Backing file for file-based stores
    pub path: Option<PathBuf>,
}

impl HistoryProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the backing file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Registry entry for history stores
pub struct HistoryProviderEntry {
    /// Unique provider name (e.g., "json_file", "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the store
    pub factory: fn(&HistoryProviderConfig) -> Result<Arc<dyn HistoryRepository>, String>,
}

#[linkme::distributed_slice]
pub static HISTORY_PROVIDERS: [HistoryProviderEntry] = [..];

/// Resolve history store by name from registry
pub fn resolve_history_provider(
    config: &HistoryProviderConfig,
) -> Result<Arc<dyn HistoryRepository>, String> {
    let provider_name = &config.provider;

    for entry in HISTORY_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = HISTORY_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown history provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered history stores as (name, description)
pub fn list_history_providers() -> Vec<(&'static str, &'static str)> {
    HISTORY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
