//! Application Layer - docgen
//!
//! This crate contains the application layer of docgen: the documentation
//! use case that turns a source document into ordered summaries, the Markdown
//! export of a run, and the provider registries that concrete adapters plug
//! into.
//!
//! ## Use Cases
//!
//! - Documentation generation (extract, summarize, optionally persist)
//! - Run history lookup per session
//! - Markdown export of a run
//!
//! ## Ports
//!
//! - `domain_services::*`: Use case interfaces consumed by the server layer
//! - `ports::registry::*`: linkme slices providers register into
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `docgen-domain`: For entities, value objects, ports and errors
//! - Pure Rust libraries for async and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
