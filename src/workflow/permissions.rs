//! Role-gated edit authorization for workflow stages.
//!
//! An [`Actor`] carries the set of capabilities the acting user holds on one
//! record. Each stage has a single [`EditRule`]: the status the record must be
//! in and the capabilities that may edit it. Administrators bypass every rule.

use std::collections::BTreeSet;

use crate::models::observation::ObservationStatus;

use super::stage::WorkflowStage;

/// A role capability held by the acting user on a given record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Creator,
    Approver,
    Responsible,
    Admin,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Creator => "creator",
            Capability::Approver => "approver",
            Capability::Responsible => "responsible",
            Capability::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities held by an actor. The empty set is an actor with no role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.0.insert(capability);
        self
    }

    pub fn insert(&mut self, capability: Capability) {
        self.0.insert(capability);
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn contains_any(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.contains(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(|c| c.name()).collect();
        f.write_str(&names.join(", "))
    }
}

/// The user asking to edit a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    /// Display label for the user's role. Not used in authorization.
    pub role: Option<String>,
    pub capabilities: CapabilitySet,
}

impl Actor {
    pub fn new(capabilities: CapabilitySet) -> Self {
        Self {
            role: None,
            capabilities,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        self.capabilities.contains(Capability::Admin)
    }
}

/// Who may edit a stage, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRule {
    pub stage: WorkflowStage,
    pub required_status: ObservationStatus,
    /// Holding any one of these is enough
    pub any_of: &'static [Capability],
}

static EDIT_RULES: [EditRule; 5] = [
    EditRule {
        stage: WorkflowStage::Creation,
        required_status: ObservationStatus::PreApproval,
        any_of: &[Capability::Creator],
    },
    EditRule {
        stage: WorkflowStage::Approval,
        required_status: ObservationStatus::PreApproval,
        any_of: &[Capability::Approver],
    },
    EditRule {
        stage: WorkflowStage::DataEntry,
        required_status: ObservationStatus::WaitingDataEntry,
        any_of: &[Capability::Responsible],
    },
    EditRule {
        stage: WorkflowStage::Execution,
        required_status: ObservationStatus::Open,
        any_of: &[Capability::Responsible],
    },
    EditRule {
        stage: WorkflowStage::Close,
        required_status: ObservationStatus::WaitingCloseApproval,
        any_of: &[Capability::Creator, Capability::Admin],
    },
];

/// The edit rule governing `stage`.
pub fn edit_rule(stage: WorkflowStage) -> &'static EditRule {
    // EDIT_RULES is indexed by stage number
    &EDIT_RULES[usize::from(stage.number() - 1)]
}

/// Whether `actor` may edit `stage` of a record currently in `status`.
pub fn can_edit(stage: WorkflowStage, status: ObservationStatus, actor: &Actor) -> bool {
    if actor.is_admin() {
        return true;
    }
    if status.is_closed() {
        return false;
    }

    let rule = edit_rule(stage);
    rule.required_status == status && actor.capabilities.contains_any(rule.any_of)
}

/// Edit authorization over raw values from the record store.
///
/// Admins are permitted unconditionally. Otherwise unknown statuses and
/// stage numbers outside 1..=5 are denied.
pub fn can_edit_stage(stage: u8, status: &str, actor: &Actor) -> bool {
    if actor.is_admin() {
        return true;
    }
    let (Some(stage), Ok(status)) = (
        WorkflowStage::from_number(stage),
        status.parse::<ObservationStatus>(),
    ) else {
        return false;
    };
    can_edit(stage, status, actor)
}
