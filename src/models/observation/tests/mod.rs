use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::observation::{FieldObservation, ObservationStatus};

fn create_test_observation(status: ObservationStatus) -> FieldObservation {
    let mut observation = FieldObservation::new(
        "obs-001".to_string(),
        "Loose guard rail on level 3".to_string(),
        Some("alice".to_string()),
    );
    observation.approver_id = Some("bob".to_string());
    observation.responsible_id = Some("carol".to_string());
    observation.due_date = NaiveDate::from_ymd_opt(2026, 3, 15);
    observation.status = status;
    observation
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
}

mod apply;
mod parse;
