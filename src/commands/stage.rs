//! Stage and progress queries for a raw status value.
//! Usage: fieldobs stage <status> | fieldobs progress <status>

use anyhow::Result;
use colored::Colorize;

use crate::models::observation::ObservationStatus;
use crate::workflow::{completed_stages, stage_from_status, WorkflowStage};

/// Print the stage currently active for `status`.
///
/// Unknown statuses print stage 1. The fallback is reported once, by the
/// warning `stage_from_status` logs to stderr.
pub fn execute(status: String) -> Result<()> {
    let stage = stage_from_status(&status);
    println!("{}", stage.number());
    Ok(())
}

/// Print every stage with its completion mark.
pub fn progress(status: String) -> Result<()> {
    let completed = completed_stages(&status);
    let current = status
        .parse::<ObservationStatus>()
        .ok()
        .map(|s| s.stage());

    println!("{} {}", "Status:".bold(), status);
    for stage in WorkflowStage::ALL {
        println!("  {}", format_stage_line(stage, &completed, current));
    }
    Ok(())
}

pub(crate) fn format_stage_line(
    stage: WorkflowStage,
    completed: &[WorkflowStage],
    current: Option<WorkflowStage>,
) -> String {
    let label = format!("{}. {}", stage.number(), stage.name());
    if completed.contains(&stage) {
        format!("{} {}", "✓".green(), label)
    } else if current == Some(stage) {
        format!("{} {}", "→".blue(), label.bold())
    } else {
        format!("{} {}", "○".dimmed(), label.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn plain_line(
        stage: WorkflowStage,
        completed: &[WorkflowStage],
        current: Option<WorkflowStage>,
    ) -> String {
        colored::control::set_override(false);
        let line = format_stage_line(stage, completed, current);
        colored::control::unset_override();
        line
    }

    #[test]
    #[serial]
    fn test_completed_stage_is_checked() {
        let completed = ObservationStatus::Open.completed_stages();
        let line = plain_line(WorkflowStage::Approval, &completed, Some(WorkflowStage::Execution));
        assert_eq!(line, "✓ 2. Approval");
    }

    #[test]
    #[serial]
    fn test_current_stage_is_arrowed() {
        let completed = ObservationStatus::Open.completed_stages();
        let line = plain_line(WorkflowStage::Execution, &completed, Some(WorkflowStage::Execution));
        assert_eq!(line, "→ 4. Execution");
    }

    #[test]
    #[serial]
    fn test_pending_stage_is_hollow() {
        let completed = ObservationStatus::Open.completed_stages();
        let line = plain_line(WorkflowStage::Close, &completed, Some(WorkflowStage::Execution));
        assert_eq!(line, "○ 5. Close");
    }

    #[test]
    #[serial]
    fn test_completed_mark_wins_over_current() {
        // Closed records report stage 5 as both current and completed
        let completed = ObservationStatus::ClosedOnTime.completed_stages();
        let line = plain_line(WorkflowStage::Close, &completed, Some(WorkflowStage::Close));
        assert_eq!(line, "✓ 5. Close");
    }
}
