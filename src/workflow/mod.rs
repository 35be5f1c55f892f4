//! Stage derivation and edit authorization for field observations.
//!
//! Everything here is a pure function of a record's status and the acting
//! user's capabilities.

mod actions;
mod permissions;
mod stage;

#[cfg(test)]
mod tests;

pub use actions::{WorkflowAction, WorkflowError};
pub use permissions::{
    can_edit, can_edit_stage, edit_rule, Actor, Capability, CapabilitySet, EditRule,
};
pub use stage::{completed_stages, stage_from_status, WorkflowStage};
