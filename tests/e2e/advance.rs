//! `fieldobs advance` against a record file

use super::helpers::*;
use fieldobs::fs::record_files::load_record;
use fieldobs::models::observation::ObservationStatus;
use tempfile::TempDir;

#[test]
fn test_advance_saves_new_status() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_record(temp_dir.path());
    let record = path.to_str().unwrap();

    let output = fieldobs(&["advance", record, "approve", "--user", "bob"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("waiting_data_entry"));

    assert_eq!(
        load_record(&path).unwrap().status,
        ObservationStatus::WaitingDataEntry
    );
}

#[test]
fn test_refused_advance_keeps_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_record(temp_dir.path());
    let before = std::fs::read_to_string(&path).unwrap();

    let output = fieldobs(&["advance", path.to_str().unwrap(), "approve", "--user", "carol"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Cannot approve"), "{}", stderr(&output));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_parallel_advances_apply_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_record(temp_dir.path());
    let record = path.to_str().unwrap();

    // Both race to approve; the lock lets exactly one see pre_approval
    let outputs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| scope.spawn(|| fieldobs(&["advance", record, "approve", "--user", "bob"])))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let succeeded = outputs.iter().filter(|o| o.status.success()).count();
    assert_eq!(succeeded, 1);
    assert_eq!(
        load_record(&path).unwrap().status,
        ObservationStatus::WaitingDataEntry
    );
}
