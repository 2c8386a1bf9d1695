//! Markdown export of documentation results

use docgen_domain::entities::SummaryResult;

/// Heading at the top of every export
pub const MARKDOWN_TITLE: &str = "# AI Generated Documentation";

/// Render results as a Markdown document, one section per result in order
pub fn render_markdown(results: &[SummaryResult]) -> String {
    let mut out = format!("{MARKDOWN_TITLE}\n\n");
    for result in results {
        out.push_str(&format!(
            "## {} ({})\n**Description:** {}\n\n```python\n{}\n```\n\n---\n\n",
            result.entity.name, result.entity.kind, result.summary, result.entity.source_text
        ));
    }
    out
}
