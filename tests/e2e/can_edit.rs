//! `fieldobs can-edit` decisions and exit status

use super::helpers::*;

#[test]
fn test_allowed_exits_zero() {
    let output = fieldobs(&["can-edit", "1", "pre_approval", "--creator"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("allowed"), "{}", stdout(&output));
}

#[test]
fn test_denied_exits_one() {
    let output = fieldobs(&["can-edit", "2", "pre_approval", "--creator"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("denied"), "{}", stdout(&output));
}

#[test]
fn test_flags_are_not_swapped() {
    // Stage 2 belongs to the approver, stage 3 to the responsible person
    let approver = fieldobs(&["can-edit", "2", "pre_approval", "--approver"]);
    assert_eq!(approver.status.code(), Some(0));

    let responsible = fieldobs(&["can-edit", "3", "waiting_data_entry", "--responsible"]);
    assert_eq!(responsible.status.code(), Some(0));

    let approver_on_data = fieldobs(&["can-edit", "3", "waiting_data_entry", "--approver"]);
    assert_eq!(approver_on_data.status.code(), Some(1));
}

#[test]
fn test_out_of_range_stage_is_denied_not_rejected() {
    for stage in ["300", "0", "-1", "99999999999"] {
        let output = fieldobs(&["can-edit", stage, "open", "--responsible"]);
        assert_eq!(output.status.code(), Some(1), "stage {stage}: {}", stderr(&output));
        assert!(stdout(&output).contains("denied"), "stage {stage}");
    }
}

#[test]
fn test_admin_allowed_on_any_stage() {
    let output = fieldobs(&["can-edit", "300", "closed_late", "--admin"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("allowed"));
}

#[test]
fn test_unknown_status_is_denied() {
    let output = fieldobs(&["can-edit", "4", "archived", "--responsible"]);
    assert_eq!(output.status.code(), Some(1));
}
