//! # docgen Server
//!
//! HTTP boundary and command line interface of docgen.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use docgen_server::{Cli, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(Cli::parse()).await
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/generate-docs` | POST | Extract and summarize every entity of a document |
//! | `/history/<session_id>` | GET | Stored runs of a session, most recent first |
//! | `/history/<session_id>/<run_id>/markdown` | GET | Markdown export of one run |
//! | `/health` | GET | Summarization model readiness |
//! | `/docs/` | GET | Interactive API page (Swagger UI) |
//! | `/openapi.json` | GET | OpenAPI document generated with utoipa |
//!
//! Every error body has the shape `{ "detail": "<description>" }`.

pub mod args;
pub mod constants;
pub mod cors;
pub mod error;
pub mod generate;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;

pub use args::{Cli, Command, GenerateArgs};
pub use init::run;
pub use routes::{ApiState, docgen_rocket};
