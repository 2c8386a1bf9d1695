//! Documentation request

use serde::{Deserialize, Serialize};

use super::verbosity::Verbosity;
use crate::constants::DEFAULT_SESSION_ID;

/// Input of one orchestration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationRequest {
    /// Full source document
    pub source_code: String,
    /// Preset applied to every entity of the run
    pub verbosity: Verbosity,
    /// Opaque session used to group persisted runs
    pub session_id: String,
    /// Append the run to the history store on success
    pub persist: bool,
}

impl DocumentationRequest {
    /// Request with default verbosity, default session and persistence on
    pub fn new(source_code: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
            verbosity: Verbosity::default(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            persist: true,
        }
    }

    /// Set the verbosity preset
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the session identifier
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Enable or disable persistence
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
