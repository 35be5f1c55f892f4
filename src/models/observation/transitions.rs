use anyhow::{bail, Result};

use super::types::ObservationStatus;

impl ObservationStatus {
    /// Check if moving from the current status to `new_status` is valid.
    ///
    /// Valid transitions:
    /// - `PreApproval` -> `WaitingDataEntry`
    /// - `WaitingDataEntry` -> `Open`
    /// - `Open` -> `WaitingCloseApproval`
    /// - `WaitingCloseApproval` -> `ClosedOnTime` | `ClosedLate` | `Open`
    /// - `ClosedOnTime` and `ClosedLate` are terminal
    pub fn can_transition_to(&self, new_status: &ObservationStatus) -> bool {
        // Same status is always valid (no-op)
        if self == new_status {
            return true;
        }

        match self {
            ObservationStatus::PreApproval => {
                matches!(new_status, ObservationStatus::WaitingDataEntry)
            }
            ObservationStatus::WaitingDataEntry => matches!(new_status, ObservationStatus::Open),
            ObservationStatus::Open => {
                matches!(new_status, ObservationStatus::WaitingCloseApproval)
            }
            ObservationStatus::WaitingCloseApproval => matches!(
                new_status,
                ObservationStatus::ClosedOnTime
                    | ObservationStatus::ClosedLate
                    | ObservationStatus::Open
            ),
            ObservationStatus::ClosedOnTime | ObservationStatus::ClosedLate => false,
        }
    }

    /// Attempt to transition to a new status, returning an error if invalid.
    pub fn try_transition(&self, new_status: ObservationStatus) -> Result<ObservationStatus> {
        if self.can_transition_to(&new_status) {
            Ok(new_status)
        } else {
            bail!("Invalid observation status transition: {self} -> {new_status}")
        }
    }

    /// Returns the statuses this status can move to, excluding itself.
    pub fn valid_transitions(&self) -> Vec<ObservationStatus> {
        match self {
            ObservationStatus::PreApproval => vec![ObservationStatus::WaitingDataEntry],
            ObservationStatus::WaitingDataEntry => vec![ObservationStatus::Open],
            ObservationStatus::Open => vec![ObservationStatus::WaitingCloseApproval],
            ObservationStatus::WaitingCloseApproval => vec![
                ObservationStatus::ClosedOnTime,
                ObservationStatus::ClosedLate,
                ObservationStatus::Open,
            ],
            ObservationStatus::ClosedOnTime | ObservationStatus::ClosedLate => vec![],
        }
    }
}
