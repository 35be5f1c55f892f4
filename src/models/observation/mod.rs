mod methods;
mod transitions;
mod types;

#[cfg(test)]
mod tests;

pub use types::{FieldObservation, ObservationStatus, StatusParseError};
