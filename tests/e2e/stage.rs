//! `fieldobs stage` output

use super::helpers::*;

#[test]
fn test_known_status_prints_stage_quietly() {
    let output = fieldobs(&["stage", "waiting_close_approval"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n");
    assert!(stderr(&output).is_empty(), "{}", stderr(&output));
}

#[test]
fn test_unknown_status_warns_once() {
    let output = fieldobs(&["stage", "archived"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");

    let stderr = stderr(&output);
    let lines: Vec<&str> = stderr.lines().filter(|line| !line.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "{stderr}");
    assert!(lines[0].contains("archived"), "{stderr}");
}
