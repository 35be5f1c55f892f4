use std::str::FromStr;

use crate::models::observation::{ObservationStatus, StatusParseError};

#[test]
fn test_parses_every_wire_name() {
    for status in ObservationStatus::ALL {
        assert_eq!(ObservationStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_display_matches_wire_name() {
    assert_eq!(ObservationStatus::WaitingCloseApproval.to_string(), "waiting_close_approval");
    assert_eq!(ObservationStatus::ClosedLate.to_string(), "closed_late");
}

#[test]
fn test_rejects_unknown_status() {
    let err = "bogus_value".parse::<ObservationStatus>().unwrap_err();
    assert_eq!(err, StatusParseError("bogus_value".to_string()));
    assert!(err.to_string().contains("bogus_value"));
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!("Open".parse::<ObservationStatus>().is_err());
    assert!(" open".parse::<ObservationStatus>().is_err());
}

#[test]
fn test_only_closed_statuses_are_closed() {
    let closed: Vec<_> = ObservationStatus::ALL
        .into_iter()
        .filter(|s| s.is_closed())
        .collect();
    assert_eq!(
        closed,
        vec![ObservationStatus::ClosedOnTime, ObservationStatus::ClosedLate]
    );
}
