use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{FieldObservation, ObservationStatus};
use crate::workflow::{
    can_edit, Actor, Capability, CapabilitySet, WorkflowAction, WorkflowError, WorkflowStage,
};

impl FieldObservation {
    pub fn new(id: String, title: String, creator_id: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            title,
            description: None,
            status: ObservationStatus::PreApproval,
            creator_id,
            approver_id: None,
            responsible_id: None,
            photos: Vec::new(),
            due_date: None,
            created_at: now,
            updated_at: now,
            closed_at: None,
            details: serde_json::Value::Null,
        }
    }

    pub fn current_stage(&self) -> WorkflowStage {
        self.status.stage()
    }

    pub fn completed_stages(&self) -> Vec<WorkflowStage> {
        self.status.completed_stages()
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Build the actor for `user_id` from this record's role assignments.
    ///
    /// A user may hold several roles on the same record. Admin is granted by
    /// the caller, never by the record.
    pub fn actor_for(&self, user_id: Option<&str>, is_admin: bool) -> Actor {
        let mut capabilities = CapabilitySet::none();

        if let Some(user) = user_id {
            let holds = |assigned: &Option<String>| assigned.as_deref() == Some(user);
            if holds(&self.creator_id) {
                capabilities.insert(Capability::Creator);
            }
            if holds(&self.approver_id) {
                capabilities.insert(Capability::Approver);
            }
            if holds(&self.responsible_id) {
                capabilities.insert(Capability::Responsible);
            }
        }
        if is_admin {
            capabilities.insert(Capability::Admin);
        }

        Actor::new(capabilities)
    }

    pub fn can_edit(&self, stage: WorkflowStage, actor: &Actor) -> bool {
        can_edit(stage, self.status, actor)
    }

    /// Stages `actor` may edit right now, in ascending order.
    pub fn editable_stages(&self, actor: &Actor) -> Vec<WorkflowStage> {
        WorkflowStage::ALL
            .into_iter()
            .filter(|stage| self.can_edit(*stage, actor))
            .collect()
    }

    /// Apply a workflow action on behalf of `actor`.
    ///
    /// The action must be authorized by the edit rule of its stage and the
    /// record must be in the action's source status. On success the record
    /// is updated in place and the new status returned.
    pub fn apply(
        &mut self,
        action: WorkflowAction,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<ObservationStatus, WorkflowError> {
        if !self.can_edit(action.stage(), actor) {
            return Err(WorkflowError::NotPermitted {
                action,
                stage: action.stage(),
                status: self.status,
            });
        }

        let target = action.target(now.date_naive(), self.due_date);
        if self.status != action.source() || !self.status.can_transition_to(&target) {
            return Err(WorkflowError::InvalidTransition {
                action,
                from: self.status,
                expected: action.source(),
            });
        }

        debug!(record = %self.id, %action, from = %self.status, to = %target, "applying workflow action");
        self.status = target;
        self.updated_at = now;
        self.closed_at = if target.is_closed() { Some(now) } else { None };

        Ok(target)
    }
}
