//! # docgen
//!
//! Generates natural-language explanations for the functions, classes and
//! methods of Python source code, serves them over HTTP and keeps a per-session
//! history of runs.
//!
//! | Crate | Layer |
//! |-------|-------|
//! | [`domain`] | Entities, value objects, ports and errors |
//! | [`application`] | Documentation use case, Markdown export, provider registries |
//! | [`providers`] | Tree-sitter extractor, summarization adapters, history stores |
//! | [`infrastructure`] | Configuration, logging, composition root |
//! | [`server`] | Rocket HTTP API and command line |

pub use docgen_application as application;
pub use docgen_domain as domain;
pub use docgen_infrastructure as infrastructure;
pub use docgen_providers as providers;
pub use docgen_server as server;

pub use docgen_domain::{
    CodeEntity, DocumentationRequest, DocumentationRun, EntityKind, Error, Result, SummaryResult,
    Verbosity,
};
pub use docgen_infrastructure::{AppConfig, AppContext, init_app};
