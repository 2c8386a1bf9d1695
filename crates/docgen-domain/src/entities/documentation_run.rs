//! Summaries and persisted documentation runs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::code_entity::CodeEntity;
use crate::constants::{RUN_TIMESTAMP_FORMAT, UNTITLED_RUN_TITLE};

/// One entity paired with the explanation generated for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResult {
    /// The documented entity
    #[serde(flatten)]
    pub entity: CodeEntity,
    /// Natural-language summary produced by the model
    #[serde(rename = "generated_docstring", alias = "generatedDocstring")]
    pub summary: String,
}

impl SummaryResult {
    /// Pair an entity with its summary
    pub fn new(entity: CodeEntity, summary: impl Into<String>) -> Self {
        Self {
            entity,
            summary: summary.into(),
        }
    }
}

/// Persisted record of one orchestration call
///
/// Records are created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentationRun {
    /// Globally unique run identifier
    pub id: String,
    /// Caller-supplied opaque session grouping runs
    #[serde(alias = "sessionId")]
    pub session_id: String,
    /// Local creation time, minute precision
    #[schema(example = "2024-01-31 14:05")]
    pub timestamp: String,
    /// Name of the first result, or a placeholder for empty runs
    pub title: String,
    /// Ordered results of the run
    pub results: Vec<SummaryResult>,
}

impl DocumentationRun {
    /// Build a new run stamped with a fresh id and the current local time
    pub fn new(session_id: impl Into<String>, results: Vec<SummaryResult>) -> Self {
        let timestamp = chrono::Local::now()
            .format(RUN_TIMESTAMP_FORMAT)
            .to_string();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            timestamp,
            title: Self::title_for(&results),
            results,
        }
    }

    /// Title derived from an ordered result list
    pub fn title_for(results: &[SummaryResult]) -> String {
        results
            .first()
            .map(|r| r.entity.name.clone())
            .unwrap_or_else(|| UNTITLED_RUN_TITLE.to_string())
    }

    /// Whether this run belongs to `session_id`
    pub fn belongs_to(&self, session_id: &str) -> bool {
        self.session_id == session_id
    }
}
