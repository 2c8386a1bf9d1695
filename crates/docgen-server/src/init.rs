//! Process startup
//!
//! Loads configuration, installs logging, then dispatches to the selected
//! command. For `serve`, the summarization model is brought up by `init_app`
//! before Rocket starts listening; a model that cannot be loaded aborts
//! startup instead of yielding a server that fails every request.

use std::path::Path;

use docgen_application::ports::registry::{
    list_extraction_providers, list_history_providers, list_summarization_providers,
};
use docgen_infrastructure::config::{AppConfig, ConfigLoader};
use docgen_infrastructure::init_app;
use docgen_infrastructure::logging::init_logging;
use tracing::info;

use crate::args::{Cli, Command, GenerateArgs};
use crate::generate::{generate_documentation, write_results};
use crate::routes::docgen_rocket;

/// Run the command selected on the command line
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or_default() {
        Command::Serve => run_server(prepare(config_path)?).await,
        Command::Generate(args) => run_generate(prepare(config_path)?, &args).await,
        Command::Providers => print_providers(),
    }
}

/// Load configuration from optional path and install logging
fn prepare(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    Ok(config)
}

/// Bring up all providers and serve the HTTP API until shutdown
async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = %config.summarization.provider,
        "Starting docgen server"
    );

    let context = init_app(config).await?;
    docgen_rocket(&context)
        .launch()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;

    info!("docgen server stopped");
    Ok(())
}

async fn run_generate(
    config: AppConfig,
    args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = init_app(config).await?;
    let results = generate_documentation(&context, args).await?;
    write_results(&mut std::io::stdout().lock(), &results)?;
    Ok(())
}

fn print_providers() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write;

    let mut out = std::io::stdout().lock();
    let sections = [
        ("Summarization adapters", list_summarization_providers()),
        ("History stores", list_history_providers()),
        ("Entity extractors", list_extraction_providers()),
    ];
    for (title, entries) in sections {
        writeln!(out, "{title}:")?;
        for (name, description) in entries {
            writeln!(out, "  {name:<14} {description}")?;
        }
    }
    Ok(())
}
