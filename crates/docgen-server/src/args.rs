//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docgen_domain::value_objects::Verbosity;

/// Command line interface for docgen
#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(about = "Generate natural-language documentation for Python source code")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, Default)]
pub enum Command {
    /// Run the HTTP API
    #[default]
    Serve,
    /// Document one source file and print the results
    Generate(GenerateArgs),
    /// List the registered summarization adapters, history stores and extractors
    Providers,
}

/// Arguments of the `generate` command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source file to document
    #[arg(short, long)]
    pub file: PathBuf,

    /// Summary length preset: concise or detailed
    #[arg(long, default_value = "concise")]
    pub verbosity: Verbosity,

    /// Session the run is filed under when persisted
    #[arg(long, default_value = docgen_domain::constants::DEFAULT_SESSION_ID)]
    pub session_id: String,

    /// Store the run in the configured history store
    #[arg(long)]
    pub persist: bool,

    /// Also write the Markdown export to this path
    #[arg(short, long)]
    pub markdown: Option<PathBuf>,
}
