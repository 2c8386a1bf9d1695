//! Documentation Service Use Case
//!
//! Drives one run: validate the document, extract its entities once, then
//! summarize them strictly one after another with the run's verbosity. The
//! summarization model is a single shared resource, so entities are never
//! fanned out in parallel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain_services::DocumentationServiceInterface;
use docgen_domain::entities::{DocumentationRun, SummaryResult};
use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::{EntityExtractor, SummarizationProvider};
use docgen_domain::repositories::HistoryRepository;
use docgen_domain::value_objects::DocumentationRequest;
use tracing::{debug, info, warn};

/// Message returned when a request carries no source code
pub const EMPTY_SOURCE_MESSAGE: &str = "Source code cannot be empty.";

/// Whole milliseconds of `elapsed`, saturating at `u64::MAX`
pub fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Documentation service implementation
pub struct DocumentationServiceImpl {
    extractor: Arc<dyn EntityExtractor>,
    summarizer: Arc<dyn SummarizationProvider>,
    history: Arc<dyn HistoryRepository>,
}

impl DocumentationServiceImpl {
    /// Create new documentation service with injected dependencies
    pub fn new(
        extractor: Arc<dyn EntityExtractor>,
        summarizer: Arc<dyn SummarizationProvider>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            history,
        }
    }

    /// Summarization provider used by this service
    pub fn summarizer(&self) -> &Arc<dyn SummarizationProvider> {
        &self.summarizer
    }
}

#[async_trait::async_trait]
impl DocumentationServiceInterface for DocumentationServiceImpl {
    async fn generate(&self, request: DocumentationRequest) -> Result<Vec<SummaryResult>> {
        if request.source_code.is_empty() {
            return Err(Error::invalid_argument(EMPTY_SOURCE_MESSAGE));
        }

        let started = Instant::now();
        let entities = self.extractor.extract(&request.source_code);
        if entities.is_empty() {
            warn!(
                session_id = %request.session_id,
                language = self.extractor.language(),
                "No documentable entities found"
            );
        }
        debug!(
            session_id = %request.session_id,
            entities = entities.len(),
            verbosity = %request.verbosity,
            "Extracted entities"
        );

        let mut results = Vec::with_capacity(entities.len());
        for entity in entities {
            let summary = self
                .summarizer
                .summarize(&entity.source_text, request.verbosity)
                .await?;
            results.push(SummaryResult::new(entity, summary));
        }

        if request.persist {
            let run = DocumentationRun::new(request.session_id.clone(), results.clone());
            debug!(run_id = %run.id, title = %run.title, "Persisting run");
            self.history.append(run).await?;
        }

        info!(
            session_id = %request.session_id,
            entities = results.len(),
            verbosity = %request.verbosity,
            persisted = request.persist,
            elapsed_ms = whole_millis(started.elapsed()),
            "Documentation generated"
        );
        Ok(results)
    }

    async fn history(&self, session_id: &str) -> Result<Vec<DocumentationRun>> {
        self.history.query(session_id).await
    }
}
