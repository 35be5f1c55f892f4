//! Edit authorization queries.
//! Usage: fieldobs can-edit <stage> <status> [role flags] | fieldobs matrix [role flags]

use anyhow::Result;
use colored::Colorize;

use crate::models::observation::ObservationStatus;
use crate::workflow::{can_edit, can_edit_stage, Actor, WorkflowStage};

/// Report whether `actor` may edit `stage` while the record is in `status`.
///
/// Returns the decision so the caller can pick an exit code. Stage numbers
/// that do not fit a `u8` are out of range like any other unknown stage.
pub fn can_edit_cmd(stage: i64, status: String, actor: &Actor) -> Result<bool> {
    let allowed = can_edit_stage(u8::try_from(stage).unwrap_or(u8::MAX), &status, actor);
    let who = actor
        .role
        .as_deref()
        .map(|role| format!("{role} [{}]", actor.capabilities))
        .unwrap_or_else(|| actor.capabilities.to_string());

    if allowed {
        println!(
            "{} {} may edit stage {} while {}",
            "allowed".green().bold(),
            who,
            stage,
            status
        );
    } else {
        println!(
            "{} {} may not edit stage {} while {}",
            "denied".red().bold(),
            who,
            stage,
            status
        );
    }
    Ok(allowed)
}

/// Print the full status x stage edit matrix for `actor`.
pub fn matrix(actor: &Actor) -> Result<()> {
    println!("{} {}", "Capabilities:".bold(), actor.capabilities);

    let header: String = WorkflowStage::ALL
        .iter()
        .map(|stage| format!("{:^5}", stage.number()))
        .collect();
    println!("  {:<24}{}", "status \\ stage", header.bold());

    for status in ObservationStatus::ALL {
        let cells: String = WorkflowStage::ALL
            .into_iter()
            .map(|stage| {
                if can_edit(stage, status, actor) {
                    format!("{:^5}", "✓").green().to_string()
                } else {
                    format!("{:^5}", "·").dimmed().to_string()
                }
            })
            .collect();
        println!("  {:<24}{}", status.as_str(), cells);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{Capability, CapabilitySet};

    fn responsible() -> Actor {
        Actor::new(CapabilitySet::none().with(Capability::Responsible))
    }

    #[test]
    fn test_in_range_stage_uses_edit_rules() {
        assert!(can_edit_cmd(4, "open".to_string(), &responsible()).unwrap());
        assert!(!can_edit_cmd(1, "open".to_string(), &responsible()).unwrap());
    }

    #[test]
    fn test_stage_beyond_u8_is_denied() {
        for stage in [300, 256, -1, i64::MAX, i64::MIN] {
            assert!(
                !can_edit_cmd(stage, "open".to_string(), &responsible()).unwrap(),
                "stage {stage}"
            );
        }
    }

    #[test]
    fn test_admin_allowed_for_any_stage_number() {
        let admin = Actor::new(CapabilitySet::none().with(Capability::Admin));
        assert!(can_edit_cmd(300, "open".to_string(), &admin).unwrap());
        assert!(can_edit_cmd(-1, "closed_late".to_string(), &admin).unwrap());
    }
}
