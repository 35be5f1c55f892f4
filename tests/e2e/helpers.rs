//! Helpers for running the compiled CLI

use fieldobs::fs::record_files::save_record;
use fieldobs::models::observation::FieldObservation;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run `fieldobs` with `args`, uncolored and with logging at its default.
pub fn fieldobs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldobs"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run fieldobs")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write a fresh record with alice, bob and carol in their usual roles.
pub fn write_record(dir: &Path) -> PathBuf {
    let path = dir.join("obs.json");
    let mut record = FieldObservation::new(
        "obs-e2e".to_string(),
        "Trip hazard at gate 3".to_string(),
        Some("alice".to_string()),
    );
    record.approver_id = Some("bob".to_string());
    record.responsible_id = Some("carol".to_string());
    save_record(&record, &path).expect("Failed to write record");
    path
}
