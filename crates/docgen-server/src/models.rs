//! Request and response bodies

use docgen_domain::constants::DEFAULT_SESSION_ID;
use docgen_domain::entities::SummaryResult;
use docgen_domain::value_objects::{DocumentationRequest, Verbosity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_persist() -> bool {
    true
}

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

/// Body of `POST /generate-docs`
///
/// camelCase field names are accepted for older clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateDocsRequest {
    /// Source document to process
    #[serde(alias = "sourceCode")]
    pub source_code: String,
    /// Summary length preset
    #[serde(default)]
    pub verbosity: Verbosity,
    /// Store the run in the history store
    #[serde(default = "default_persist")]
    #[schema(default = true)]
    pub persist: bool,
    /// Session the run is filed under
    #[serde(default = "default_session_id", alias = "sessionId")]
    pub session_id: String,
}

impl From<GenerateDocsRequest> for DocumentationRequest {
    fn from(body: GenerateDocsRequest) -> Self {
        DocumentationRequest::new(body.source_code)
            .with_verbosity(body.verbosity)
            .with_session(body.session_id)
            .with_persist(body.persist)
    }
}

/// Body returned by `POST /generate-docs`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateDocsResponse {
    /// One entry per extracted entity, in source order
    pub results: Vec<SummaryResult>,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ready` or `unavailable`
    #[schema(example = "ready")]
    pub status: String,
    /// Summarization adapter name
    pub provider: String,
    /// Model served by the adapter
    pub model: String,
}
