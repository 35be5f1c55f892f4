//! Input validation for identifiers and paths supplied on the command line.
//!
//! Record ids, user ids and render template ids end up in request URLs,
//! log lines and file names, so they are restricted to a conservative
//! character set before use.

use anyhow::{bail, Result};
use std::path::Path;

/// Maximum allowed length for ids (record, user, template).
pub const MAX_ID_LENGTH: usize = 128;

/// Maximum allowed length for free-form role labels.
pub const MAX_LABEL_LENGTH: usize = 64;

/// Reserved names that cannot be used as ids (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates that an id is safe to embed in URLs and file names.
///
/// An id is valid if:
/// - It is not empty
/// - It is no longer than MAX_ID_LENGTH characters
/// - It contains only alphanumeric characters, dashes, and underscores
/// - It does not use reserved system names
///
/// # Examples
///
/// ```
/// use fieldobs::validation::validate_id;
///
/// assert!(validate_id("obs-2026-001").is_ok());
/// assert!(validate_id("inspection_report").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("../etc/passwd").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    let id_lower = id.to_lowercase();
    if RESERVED_NAMES.contains(&id_lower.as_str()) {
        bail!("ID '{id}' uses a reserved name");
    }

    Ok(())
}

/// Validates a role label. Labels are display text only.
pub fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        bail!("Role label cannot be blank");
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        bail!(
            "Role label too long: {} characters (max {})",
            label.chars().count(),
            MAX_LABEL_LENGTH
        );
    }
    if label.chars().any(char::is_control) {
        bail!("Role label contains control characters");
    }

    Ok(())
}

/// Validates the destination of a rendered document.
///
/// The path must not be an existing directory and its parent, when given,
/// must exist.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("Output path cannot be empty");
    }
    if path.is_dir() {
        bail!("Output path '{}' is a directory", path.display());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            bail!(
                "Output directory '{}' does not exist",
                parent.display()
            );
        }
    }

    Ok(())
}

/// Clap value parser for validating ID arguments.
///
/// ```ignore
/// #[arg(value_parser = clap_id_validator)]
/// id: String,
/// ```
pub fn clap_id_validator(s: &str) -> Result<String, String> {
    validate_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Clap value parser for role labels.
pub fn clap_label_validator(s: &str) -> Result<String, String> {
    validate_label(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
