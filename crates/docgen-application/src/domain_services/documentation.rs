//! Documentation service interface

use async_trait::async_trait;
use docgen_domain::entities::{DocumentationRun, SummaryResult};
use docgen_domain::error::Result;
use docgen_domain::value_objects::DocumentationRequest;

/// Request orchestration over extractor, summarizer and history store
///
/// A run is all-or-nothing: either every extracted entity is summarized (and
/// the run persisted when requested) or an error is returned and nothing is
/// stored.
#[async_trait]
pub trait DocumentationServiceInterface: Send + Sync {
    /// Extract entities from the request's document and summarize each of them in order
    async fn generate(&self, request: DocumentationRequest) -> Result<Vec<SummaryResult>>;

    /// Stored runs for `session_id`, most recent first
    async fn history(&self, session_id: &str) -> Result<Vec<DocumentationRun>>;

    /// One stored run of `session_id`
    ///
    /// Fails with `NotFound` when the run does not exist in that session.
    async fn find_run(&self, session_id: &str, run_id: &str) -> Result<DocumentationRun> {
        self.history(session_id)
            .await?
            .into_iter()
            .find(|run| run.id == run_id)
            .ok_or_else(|| docgen_domain::Error::not_found(format!("Run '{run_id}'")))
    }
}
