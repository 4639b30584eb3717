//! Pre-flight input checks.
//!
//! These run before any network activity and fail with
//! [`ClawPrintError::Validation`].

use crate::error::{ClawPrintError, ClawPrintResult};

/// Require a string parameter that is present and not blank after trimming
pub fn require(name: &str, value: Option<&str>) -> ClawPrintResult<()> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ClawPrintError::validation(format!(
            "'{}' is required and cannot be empty.",
            name
        ))),
    }
}

/// Require a non-empty list whose entries are all non-blank
pub fn require_list(name: &str, values: &[String]) -> ClawPrintResult<()> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(ClawPrintError::validation(format!(
            "'{}' must contain at least one non-empty entry.",
            name
        )));
    }
    Ok(())
}

/// Require an integer within an inclusive range
pub fn require_range(name: &str, value: i64, min: i64, max: i64) -> ClawPrintResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ClawPrintError::validation(format!(
            "{} must be between {} and {}.",
            name, min, max
        )))
    }
}
