//! End-to-end tests that run the `fieldobs` binary

pub mod advance;
pub mod can_edit;
pub mod helpers;
pub mod stage;

pub use helpers::*;
