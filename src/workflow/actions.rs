use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

use crate::models::observation::ObservationStatus;

use super::stage::WorkflowStage;

/// A workflow step that advances a record's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowAction {
    Approve,
    SubmitData,
    RequestClose,
    ApproveClose,
    RejectClose,
}

impl WorkflowAction {
    pub const ALL: [WorkflowAction; 5] = [
        WorkflowAction::Approve,
        WorkflowAction::SubmitData,
        WorkflowAction::RequestClose,
        WorkflowAction::ApproveClose,
        WorkflowAction::RejectClose,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowAction::Approve => "approve",
            WorkflowAction::SubmitData => "submit-data",
            WorkflowAction::RequestClose => "request-close",
            WorkflowAction::ApproveClose => "approve-close",
            WorkflowAction::RejectClose => "reject-close",
        }
    }

    /// Stage whose edit rule authorizes this action.
    pub fn stage(&self) -> WorkflowStage {
        match self {
            WorkflowAction::Approve => WorkflowStage::Approval,
            WorkflowAction::SubmitData => WorkflowStage::DataEntry,
            WorkflowAction::RequestClose => WorkflowStage::Execution,
            WorkflowAction::ApproveClose | WorkflowAction::RejectClose => WorkflowStage::Close,
        }
    }

    /// Status the record must be in for this action to apply.
    pub fn source(&self) -> ObservationStatus {
        match self {
            WorkflowAction::Approve => ObservationStatus::PreApproval,
            WorkflowAction::SubmitData => ObservationStatus::WaitingDataEntry,
            WorkflowAction::RequestClose => ObservationStatus::Open,
            WorkflowAction::ApproveClose | WorkflowAction::RejectClose => {
                ObservationStatus::WaitingCloseApproval
            }
        }
    }

    /// Status the record moves to.
    ///
    /// Approving a close after `due_date` yields `ClosedLate`. Without a due
    /// date every close is on time.
    pub fn target(&self, closed_on: NaiveDate, due_date: Option<NaiveDate>) -> ObservationStatus {
        match self {
            WorkflowAction::Approve => ObservationStatus::WaitingDataEntry,
            WorkflowAction::SubmitData => ObservationStatus::Open,
            WorkflowAction::RequestClose => ObservationStatus::WaitingCloseApproval,
            WorkflowAction::ApproveClose => {
                if due_date.is_some_and(|due| closed_on > due) {
                    ObservationStatus::ClosedLate
                } else {
                    ObservationStatus::ClosedOnTime
                }
            }
            WorkflowAction::RejectClose => ObservationStatus::Open,
        }
    }
}

impl std::fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkflowAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        WorkflowAction::ALL
            .into_iter()
            .find(|action| action.name() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = WorkflowAction::ALL.iter().map(|a| a.name()).collect();
                anyhow::anyhow!("Unknown action '{s}'. Expected one of: {}", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("not permitted to {action}: stage {stage} is not editable while {status}")]
    NotPermitted {
        action: WorkflowAction,
        stage: WorkflowStage,
        status: ObservationStatus,
    },

    #[error("cannot {action} while {from}: record must be {expected}")]
    InvalidTransition {
        action: WorkflowAction,
        from: ObservationStatus,
        expected: ObservationStatus,
    },
}
