use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A field observation report as supplied by the record store.
///
/// Only `status` and the three role ids take part in workflow decisions.
/// Everything else is payload carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldObservation {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ObservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_id: Option<String>,
    /// Image references shown in the viewer, in display order
    #[serde(default)]
    pub photos: Vec<String>,
    /// Deadline deciding between an on-time and a late close
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Free-form payload owned by the record store
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Persisted status of a field observation.
///
/// Forward progression:
/// - `PreApproval` -> `WaitingDataEntry` (approved)
/// - `WaitingDataEntry` -> `Open` (data entered)
/// - `Open` -> `WaitingCloseApproval` (close requested)
/// - `WaitingCloseApproval` -> `ClosedOnTime` | `ClosedLate` (close approved)
/// - `WaitingCloseApproval` -> `Open` (close rejected)
/// - `ClosedOnTime` and `ClosedLate` are terminal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ObservationStatus {
    PreApproval,
    WaitingDataEntry,
    Open,
    WaitingCloseApproval,
    ClosedOnTime,
    ClosedLate,
}

impl ObservationStatus {
    /// Every status in forward order.
    pub const ALL: [ObservationStatus; 6] = [
        ObservationStatus::PreApproval,
        ObservationStatus::WaitingDataEntry,
        ObservationStatus::Open,
        ObservationStatus::WaitingCloseApproval,
        ObservationStatus::ClosedOnTime,
        ObservationStatus::ClosedLate,
    ];

    /// Wire name as stored by the record store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationStatus::PreApproval => "pre_approval",
            ObservationStatus::WaitingDataEntry => "waiting_data_entry",
            ObservationStatus::Open => "open",
            ObservationStatus::WaitingCloseApproval => "waiting_close_approval",
            ObservationStatus::ClosedOnTime => "closed_on_time",
            ObservationStatus::ClosedLate => "closed_late",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            ObservationStatus::ClosedOnTime | ObservationStatus::ClosedLate
        )
    }
}

impl std::fmt::Display for ObservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown observation status '{0}'")]
pub struct StatusParseError(pub String);

impl FromStr for ObservationStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObservationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}
