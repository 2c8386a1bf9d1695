//! History repository port

use async_trait::async_trait;

use crate::entities::DocumentationRun;
use crate::error::Result;

/// Append-only store of documentation runs
///
/// Records are kept most-recent-first: `append` inserts at the front of the
/// stored list, and `query` preserves stored order. There is no update or
/// delete operation. Possession of a session id is the only access control.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Insert `run` at the front of the stored list and persist the whole list
    async fn append(&self, run: DocumentationRun) -> Result<()>;

    /// All runs whose session id equals `session_id`, most recent first
    async fn query(&self, session_id: &str) -> Result<Vec<DocumentationRun>>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
