//! Offline `generate` command
//!
//! Runs the documentation use case once against a file on disk, without
//! starting the HTTP server.

use std::io::Write;

use docgen_application::use_cases::render_markdown;
use docgen_domain::entities::SummaryResult;
use docgen_domain::error::Result;
use docgen_domain::value_objects::DocumentationRequest;
use docgen_infrastructure::AppContext;
use docgen_infrastructure::error_ext::ErrorContext;
use tracing::info;

use crate::args::GenerateArgs;

/// Document `args.file` and write the Markdown export when requested
pub async fn generate_documentation(
    context: &AppContext,
    args: &GenerateArgs,
) -> Result<Vec<SummaryResult>> {
    let source = tokio::fs::read_to_string(&args.file)
        .await
        .io_context(format!("Failed to read source file: {}", args.file.display()))?;

    let request = DocumentationRequest::new(source)
        .with_verbosity(args.verbosity)
        .with_session(args.session_id.clone())
        .with_persist(args.persist);
    let results = context.documentation().generate(request).await?;

    if let Some(path) = &args.markdown {
        tokio::fs::write(path, render_markdown(&results))
            .await
            .io_context(format!("Failed to write Markdown export: {}", path.display()))?;
        info!(path = %path.display(), entities = results.len(), "Markdown export written");
    }

    Ok(results)
}

/// Print each entity with its explanation
pub fn write_results<W: Write>(out: &mut W, results: &[SummaryResult]) -> std::io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No functions, classes or methods found.");
    }
    for result in results {
        writeln!(out, "{} ({})", result.entity.name, result.entity.kind)?;
        writeln!(out, "    {}", result.summary)?;
        writeln!(out)?;
    }
    Ok(())
}
