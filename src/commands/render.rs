//! Render a record to PDF through the document service.
//! Usage: fieldobs render <record.json> --template <id> --output <file.pdf>

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::fs::record_files::load_record;
use crate::render::RenderClient;
use crate::validation::validate_output_path;

pub fn execute(config: &Config, path: &Path, template_id: String, output: &Path) -> Result<()> {
    validate_output_path(output)?;
    let record = load_record(path)?;

    let client = RenderClient::from_config(&config.render)?;

    println!(
        "  {} Rendering '{}' with template {}...",
        "→".blue(),
        record.id,
        template_id
    );
    let document = client
        .render(&template_id, &record)
        .context("Document rendering failed")?;

    document
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Saved {} ({} bytes)",
        "✓".green().bold(),
        output.display(),
        document.bytes.len()
    );
    println!("  {} SHA-256: {}", "ℹ".blue(), document.sha256().dimmed());
    Ok(())
}
