//! History store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_HISTORY_PATH, DEFAULT_HISTORY_PROVIDER};

/// History store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Registered store name ("json_file", "memory")
    pub provider: String,
    /// Backing file of the JSON file store
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_HISTORY_PROVIDER.to_string(),
            path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}
