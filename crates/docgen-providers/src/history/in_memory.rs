//! In-memory history store
//!
//! Same ordering and filtering as the file store; data is lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use docgen_domain::entities::DocumentationRun;
use docgen_domain::error::Result;
use docgen_domain::repositories::HistoryRepository;

/// History store held in process memory
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    runs: RwLock<Vec<DocumentationRun>>,
}

impl InMemoryHistoryRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored runs across all sessions
    pub async fn len(&self) -> usize {
        self.runs.read().await.len()
    }

    /// Whether no run has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.runs.read().await.is_empty()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, run: DocumentationRun) -> Result<()> {
        self.runs.write().await.insert(0, run);
        Ok(())
    }

    async fn query(&self, session_id: &str) -> Result<Vec<DocumentationRun>> {
        Ok(self
            .runs
            .read()
            .await
            .iter()
            .filter(|run| run.belongs_to(session_id))
            .cloned()
            .collect())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use docgen_application::ports::registry::{
    HISTORY_PROVIDERS, HistoryProviderConfig, HistoryProviderEntry,
};

fn memory_factory(
    _config: &HistoryProviderConfig,
) -> std::result::Result<Arc<dyn HistoryRepository>, String> {
    Ok(Arc::new(InMemoryHistoryRepository::new()))
}

#[linkme::distributed_slice(HISTORY_PROVIDERS)]
static MEMORY_HISTORY: HistoryProviderEntry = HistoryProviderEntry {
    name: "memory",
    description: "Process memory, lost on restart",
    factory: memory_factory,
};
