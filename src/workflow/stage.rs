use tracing::warn;

use crate::models::observation::ObservationStatus;

/// One step of the field observation workflow.
///
/// The discriminant is the stage number shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkflowStage {
    Creation = 1,
    Approval = 2,
    DataEntry = 3,
    Execution = 4,
    Close = 5,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 5] = [
        WorkflowStage::Creation,
        WorkflowStage::Approval,
        WorkflowStage::DataEntry,
        WorkflowStage::Execution,
        WorkflowStage::Close,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        WorkflowStage::ALL
            .into_iter()
            .find(|stage| stage.number() == number)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowStage::Creation => "Creation",
            WorkflowStage::Approval => "Approval",
            WorkflowStage::DataEntry => "Data entry",
            WorkflowStage::Execution => "Execution",
            WorkflowStage::Close => "Close",
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

impl ObservationStatus {
    /// Stage currently active for this status.
    ///
    /// No status maps to `Creation`; that stage only exists before a record
    /// reaches the store.
    pub fn stage(&self) -> WorkflowStage {
        match self {
            ObservationStatus::PreApproval => WorkflowStage::Approval,
            ObservationStatus::WaitingDataEntry => WorkflowStage::DataEntry,
            ObservationStatus::Open => WorkflowStage::Execution,
            ObservationStatus::WaitingCloseApproval
            | ObservationStatus::ClosedOnTime
            | ObservationStatus::ClosedLate => WorkflowStage::Close,
        }
    }

    /// Stages considered finished, in ascending order.
    pub fn completed_stages(&self) -> Vec<WorkflowStage> {
        let finished = match self {
            ObservationStatus::PreApproval => 0,
            ObservationStatus::WaitingDataEntry => 2,
            ObservationStatus::Open => 3,
            ObservationStatus::WaitingCloseApproval => 4,
            ObservationStatus::ClosedOnTime | ObservationStatus::ClosedLate => 5,
        };
        WorkflowStage::ALL.into_iter().take(finished).collect()
    }
}

/// Stage for a raw status value from the record store.
///
/// Unknown values fall back to `Creation` instead of failing. Use
/// [`ObservationStatus::from_str`](std::str::FromStr) to reject them.
pub fn stage_from_status(status: &str) -> WorkflowStage {
    match status.parse::<ObservationStatus>() {
        Ok(status) => status.stage(),
        Err(err) => {
            warn!(%err, "falling back to the creation stage");
            WorkflowStage::Creation
        }
    }
}

/// Completed stages for a raw status value; empty for unknown values.
pub fn completed_stages(status: &str) -> Vec<WorkflowStage> {
    status
        .parse::<ObservationStatus>()
        .map(|status| status.completed_stages())
        .unwrap_or_default()
}
