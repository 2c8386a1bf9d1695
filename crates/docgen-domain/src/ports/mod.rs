//! Domain Port Interfaces
//!
//! Contracts the core consumes. Implementations live in `docgen-providers`
//! and are wired together by `docgen-infrastructure`.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EntityExtractor`] | Turns a source document into ordered entities |
//! | [`SummarizationProvider`] | Summarizes one entity's source text |

pub mod providers;

pub use providers::{EntityExtractor, SummarizationProvider};
