//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = huggingface" → HF adapter    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in docgen-providers)
//!
//! ```ignore
//! use docgen_application::ports::registry::{SummarizationProviderEntry, SUMMARIZATION_PROVIDERS};
//!
//! #[linkme::distributed_slice(SUMMARIZATION_PROVIDERS)]
//! static OLLAMA_PROVIDER: SummarizationProviderEntry = SummarizationProviderEntry {
//!     name: "ollama",
//!     description: "Ollama local model server",
//!     factory: |config| Ok(Arc::new(OllamaSummarizer::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in docgen-infrastructure)
//!
//! ```ignore
//! use docgen_application::ports::registry::resolve_summarization_provider;
//!
//! let config = SummarizationProviderConfig::new("ollama");
//! let provider = resolve_summarization_provider(&config)?;
//! ```

pub mod extraction;
pub mod history;
pub mod summarization;

// Re-export all registry types and functions
pub use extraction::{
    EXTRACTION_PROVIDERS, ExtractionProviderConfig, ExtractionProviderEntry,
    list_extraction_providers, resolve_extraction_provider,
};
pub use history::{
    HISTORY_PROVIDERS, HistoryProviderConfig, HistoryProviderEntry, list_history_providers,
    resolve_history_provider,
};
pub use summarization::{
    SUMMARIZATION_PROVIDERS, SummarizationProviderConfig, SummarizationProviderEntry,
    list_summarization_providers, resolve_summarization_provider,
};
