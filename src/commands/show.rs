//! Record summary.
//! Usage: fieldobs show <record.json> [--user <id>] [--admin]

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::stage::format_stage_line;
use crate::fs::record_files::load_record;

pub fn execute(path: &Path, user: Option<String>, admin: bool) -> Result<()> {
    let record = load_record(path)?;

    println!("{} {}", record.id.bold(), record.title);
    if let Some(description) = &record.description {
        println!("  {}", description.dimmed());
    }
    println!();
    println!("  Status:      {}", record.status);
    println!("  Stage:       {}", record.current_stage());
    print_role("Creator", record.creator_id.as_deref());
    print_role("Approver", record.approver_id.as_deref());
    print_role("Responsible", record.responsible_id.as_deref());
    if let Some(due) = record.due_date {
        println!("  Due:         {due}");
    }
    if let Some(closed_at) = record.closed_at {
        println!("  Closed:      {}", closed_at.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("  Photos:      {}", record.photos.len());

    println!("\n{}", "Progress".bold());
    let completed = record.completed_stages();
    let current = (!record.is_closed()).then(|| record.current_stage());
    for stage in crate::workflow::WorkflowStage::ALL {
        println!("  {}", format_stage_line(stage, &completed, current));
    }

    if user.is_some() || admin {
        let actor = record.actor_for(user.as_deref(), admin);
        let editable = record.editable_stages(&actor);
        println!(
            "\n{} {}",
            "Editable for".bold(),
            user.as_deref().unwrap_or("admin")
        );
        println!("  Capabilities: {}", actor.capabilities);
        if editable.is_empty() {
            println!("  {}", "nothing".dimmed());
        } else {
            for stage in editable {
                println!("  {} {}", "✎".blue(), stage);
            }
        }
    }

    Ok(())
}

fn print_role(label: &str, user: Option<&str>) {
    let value = user.map_or_else(|| "-".dimmed().to_string(), str::to_string);
    println!("  {:<13}{}", format!("{label}:"), value);
}
