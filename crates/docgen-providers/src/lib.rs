//! # docgen - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations following
//! Clean Architecture principles. Each provider implements a port (trait)
//! defined in `docgen-domain` and registers itself into a registry slice
//! declared in `docgen-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Extraction | `EntityExtractor` | Python (tree-sitter) |
//! | Summarization | `SummarizationProvider` | Hugging Face inference, Ollama, Null |
//! | History | `HistoryRepository` | JSON file, in-memory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! docgen-providers = { version = "0.1", default-features = false, features = ["lang-python"] }
//! ```

// Re-export docgen-domain types commonly used with providers
pub use docgen_domain::error::{Error, Result};
pub use docgen_domain::ports::providers::{EntityExtractor, SummarizationProvider};
pub use docgen_domain::repositories::HistoryRepository;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Entity extractors, one per source language
pub mod language;

/// Summarization adapters
///
/// Implements `SummarizationProvider` for pretrained model backends.
pub mod summarization;

/// History store implementations
pub mod history;
