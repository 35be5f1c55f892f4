//! Apply a workflow action to a record file.
//! Usage: fieldobs advance <record.json> <action> --user <id> [--admin]

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::fs::record_files::with_record_locked;
use crate::workflow::WorkflowAction;

pub fn execute(path: &Path, action: WorkflowAction, user: Option<String>, admin: bool) -> Result<()> {
    let (id, from, to, stage) = with_record_locked(path, |record| {
        let actor = record.actor_for(user.as_deref(), admin);
        let from = record.status;
        let to = record
            .apply(action, &actor, Utc::now())
            .with_context(|| format!("Cannot {action} record '{}'", record.id))?;
        Ok((record.id.clone(), from, to, record.current_stage()))
    })?;

    info!(record = %id, %action, %from, %to, user = user.as_deref().unwrap_or("-"), admin, "workflow action applied");
    println!(
        "{} {}: {} → {}",
        "✓".green().bold(),
        id,
        from.to_string().dimmed(),
        to.to_string().bold()
    );
    println!("  Stage: {stage}");
    Ok(())
}
