//! Pure validation helpers. No state, no side effects.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::journal::Entry;

/// Storage format for entry dates. Zero-padded so lexicographic order of
/// date strings is chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Invalid mood")]
    InvalidMood,
}

/// True iff `text` is exactly `YYYY-MM-DD` and names a real calendar date
/// (two-digit month 01-12, a day valid for that month, leap years honored).
///
/// The shape check runs first: chrono's `%m`/`%d` accept unpadded numbers,
/// which the fixed format does not allow.
pub fn validate_date(text: &str) -> bool {
    DATE_SHAPE.is_match(text) && NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
}

/// True iff the trimmed mood is non-empty and an exact, case-sensitive
/// member of `allowed`.
pub fn validate_mood(mood: &str, allowed: &[String]) -> bool {
    let mood = mood.trim();
    !mood.is_empty() && allowed.iter().any(|m| m == mood)
}

/// Composes the date and mood checks; the first failure wins, date first.
pub fn validate_entry(entry: &Entry, allowed: &[String]) -> Result<(), ValidationError> {
    if !validate_date(&entry.date) {
        return Err(ValidationError::InvalidDate);
    }
    if !validate_mood(&entry.mood, allowed) {
        return Err(ValidationError::InvalidMood);
    }
    Ok(())
}
