use super::{at, create_test_observation};
use crate::models::observation::ObservationStatus;
use crate::workflow::{WorkflowAction, WorkflowError, WorkflowStage};

#[test]
fn test_full_workflow_closes_on_time() {
    let mut observation = create_test_observation(ObservationStatus::PreApproval);
    let approver = observation.actor_for(Some("bob"), false);
    let responsible = observation.actor_for(Some("carol"), false);
    let creator = observation.actor_for(Some("alice"), false);

    observation
        .apply(WorkflowAction::Approve, &approver, at(2026, 3, 1))
        .unwrap();
    assert_eq!(observation.status, ObservationStatus::WaitingDataEntry);

    observation
        .apply(WorkflowAction::SubmitData, &responsible, at(2026, 3, 2))
        .unwrap();
    assert_eq!(observation.status, ObservationStatus::Open);

    observation
        .apply(WorkflowAction::RequestClose, &responsible, at(2026, 3, 10))
        .unwrap();
    assert_eq!(observation.status, ObservationStatus::WaitingCloseApproval);
    assert!(observation.closed_at.is_none());

    let closed = observation
        .apply(WorkflowAction::ApproveClose, &creator, at(2026, 3, 15))
        .unwrap();
    assert_eq!(closed, ObservationStatus::ClosedOnTime);
    assert_eq!(observation.closed_at, Some(at(2026, 3, 15)));
    assert_eq!(observation.updated_at, at(2026, 3, 15));
}

#[test]
fn test_close_after_due_date_is_late() {
    let mut observation = create_test_observation(ObservationStatus::WaitingCloseApproval);
    let creator = observation.actor_for(Some("alice"), false);

    let closed = observation
        .apply(WorkflowAction::ApproveClose, &creator, at(2026, 3, 16))
        .unwrap();
    assert_eq!(closed, ObservationStatus::ClosedLate);
}

#[test]
fn test_close_without_due_date_is_on_time() {
    let mut observation = create_test_observation(ObservationStatus::WaitingCloseApproval);
    observation.due_date = None;
    let creator = observation.actor_for(Some("alice"), false);

    let closed = observation
        .apply(WorkflowAction::ApproveClose, &creator, at(2030, 1, 1))
        .unwrap();
    assert_eq!(closed, ObservationStatus::ClosedOnTime);
}

#[test]
fn test_reject_close_reopens() {
    let mut observation = create_test_observation(ObservationStatus::WaitingCloseApproval);
    let creator = observation.actor_for(Some("alice"), false);

    observation
        .apply(WorkflowAction::RejectClose, &creator, at(2026, 3, 12))
        .unwrap();
    assert_eq!(observation.status, ObservationStatus::Open);
    assert!(observation.closed_at.is_none());
}

#[test]
fn test_wrong_role_is_not_permitted() {
    let mut observation = create_test_observation(ObservationStatus::PreApproval);
    let responsible = observation.actor_for(Some("carol"), false);

    let err = observation
        .apply(WorkflowAction::Approve, &responsible, at(2026, 3, 1))
        .unwrap_err();
    assert_eq!(
        err,
        WorkflowError::NotPermitted {
            action: WorkflowAction::Approve,
            stage: WorkflowStage::Approval,
            status: ObservationStatus::PreApproval,
        }
    );
    assert_eq!(observation.status, ObservationStatus::PreApproval);
}

#[test]
fn test_admin_still_needs_matching_status() {
    let mut observation = create_test_observation(ObservationStatus::ClosedOnTime);
    let admin = observation.actor_for(None, true);

    let err = observation
        .apply(WorkflowAction::SubmitData, &admin, at(2026, 4, 1))
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert_eq!(observation.status, ObservationStatus::ClosedOnTime);
}

#[test]
fn test_admin_can_drive_any_step() {
    let mut observation = create_test_observation(ObservationStatus::PreApproval);
    let admin = observation.actor_for(None, true);

    for action in [
        WorkflowAction::Approve,
        WorkflowAction::SubmitData,
        WorkflowAction::RequestClose,
        WorkflowAction::ApproveClose,
    ] {
        observation.apply(action, &admin, at(2026, 3, 1)).unwrap();
    }
    assert_eq!(observation.status, ObservationStatus::ClosedOnTime);
}
