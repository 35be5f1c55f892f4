//! Single-record JSON files used by the command line tools.
//!
//! Reads take a shared advisory lock and writes an exclusive one. A
//! read-modify-write must go through [`with_record_locked`], which holds the
//! exclusive lock from the read until the write is flushed. A separate
//! [`load_record`] then [`save_record`] pair can lose a concurrent update.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

use crate::models::observation::FieldObservation;
use crate::validation::validate_id;

/// Load a field observation from a JSON file.
///
/// The record id must pass id validation since it is echoed into requests
/// and log lines.
pub fn load_record(path: &Path) -> Result<FieldObservation> {
    let content = locked_read(path)?;
    let record = parse_record(&content, path)?;

    debug!(path = %path.display(), record = %record.id, status = %record.status, "loaded record");
    Ok(record)
}

/// Write a field observation back as pretty-printed JSON.
pub fn save_record(record: &FieldObservation, path: &Path) -> Result<()> {
    let content = serialize_record(record)?;
    locked_write(path, &content)?;

    debug!(path = %path.display(), record = %record.id, "saved record");
    Ok(())
}

/// Load, update and save a record under one exclusive lock.
///
/// The file is rewritten only when `update` returns `Ok`. On error the file
/// is left as it was and the error is returned.
pub fn with_record_locked<T>(
    path: &Path,
    update: impl FnOnce(&mut FieldObservation) -> Result<T>,
) -> Result<T> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut record = parse_record(&content, path)?;
    let previous_status = record.status;

    let output = update(&mut record)?;

    let content = serialize_record(&record)?;
    file.seek(SeekFrom::Start(0))
        .and_then(|_| file.set_len(0))
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    debug!(path = %path.display(), record = %record.id, from = %previous_status, to = %record.status, "updated record");
    // lock released when `file` drops
    Ok(output)
}

fn parse_record(content: &str, path: &Path) -> Result<FieldObservation> {
    let record: FieldObservation = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse observation record: {}", path.display()))?;
    validate_id(&record.id)
        .with_context(|| format!("Invalid record id in {}", path.display()))?;
    Ok(record)
}

fn serialize_record(record: &FieldObservation) -> Result<String> {
    let mut content =
        serde_json::to_string_pretty(record).context("Failed to serialize observation record")?;
    content.push('\n');
    Ok(content)
}

fn locked_read(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;
    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content)
}

// open -> lock -> truncate -> write -> flush, so readers never see a
// truncated file
fn locked_write(path: &Path, content: &str) -> Result<()> {
    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file for writing: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    file.set_len(0)
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;
    Ok(())
}
