use crate::workflow::{Actor, Capability, CapabilitySet};

fn actor(capabilities: &[Capability]) -> Actor {
    Actor::new(capabilities.iter().copied().collect())
}

fn admin() -> Actor {
    Actor::new(CapabilitySet::none().with(Capability::Admin))
}
