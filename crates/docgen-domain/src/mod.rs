//! # Domain Layer
//!
//! Core types and contracts for docgen, a service that extracts documentable
//! units from source code and asks a pretrained summarization model to
//! describe each of them.
//!
//! ## Module Map
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `CodeEntity`, `SummaryResult`, `DocumentationRun` |
//! | [`value_objects`] | `Verbosity`, `DecodingPreset`, `DocumentationRequest` |
//! | [`ports`] | Provider traits: entity extraction and summarization |
//! | [`repositories`] | `HistoryRepository` for persisted runs |
//! | [`error`] | Domain `Error` and `Result` |
//! | [`constants`] | Domain-wide defaults |
//!
//! This crate has no knowledge of HTTP, configuration or concrete providers.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{CodeEntity, DocumentationRun, EntityKind, SummaryResult};
pub use error::{Error, Result};
pub use value_objects::{DecodingPreset, DocumentationRequest, Verbosity};
