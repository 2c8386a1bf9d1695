//! JSON file history store
//!
//! All runs live in one pretty-printed JSON array, most recent first. Every
//! append reads the whole file, inserts at the front and rewrites the whole
//! file. The rewrite goes through a sibling temporary file and a rename so a
//! crash never leaves a half-written history behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use docgen_domain::entities::DocumentationRun;
use docgen_domain::error::{Error, Result};
use docgen_domain::repositories::HistoryRepository;

/// History store backed by a single JSON file
pub struct JsonFileHistoryRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileHistoryRepository {
    /// Create a store backed by `path`; the file is created on first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<DocumentationRun>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read history file {}", self.path.display()),
                    e,
                ));
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::internal(format!(
                "Failed to parse history file {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn store(&self, runs: &[DocumentationRun]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let content = serde_json::to_string_pretty(runs)
            .map_err(|e| Error::internal(format!("Failed to serialize history: {e}")))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, content).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", tmp_path.display()), e)
        })?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to replace history file {}", self.path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryRepository {
    async fn append(&self, run: DocumentationRun) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut runs = self.load().await?;
        debug!(run_id = %run.id, session_id = %run.session_id, stored = runs.len(), "Appending run");
        runs.insert(0, run);
        self.store(&runs).await
    }

    async fn query(&self, session_id: &str) -> Result<Vec<DocumentationRun>> {
        let runs = self.load().await?;
        Ok(runs
            .into_iter()
            .filter(|run| run.belongs_to(session_id))
            .collect())
    }

    fn provider_name(&self) -> &str {
        "json_file"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use docgen_application::ports::registry::{
    HISTORY_PROVIDERS, HistoryProviderConfig, HistoryProviderEntry,
};

fn json_file_factory(
    config: &HistoryProviderConfig,
) -> std::result::Result<Arc<dyn HistoryRepository>, String> {
    let path = config
        .path
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| "json_file history store requires a path".to_string())?;
    Ok(Arc::new(JsonFileHistoryRepository::new(path)))
}

#[linkme::distributed_slice(HISTORY_PROVIDERS)]
static JSON_FILE_HISTORY: HistoryProviderEntry = HistoryProviderEntry {
    name: "json_file",
    description: "Single JSON array file, rewritten on every append",
    factory: json_file_factory,
};
