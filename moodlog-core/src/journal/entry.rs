use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Mood filter value that matches every mood.
pub const MOOD_ALL: &str = "All";

/// One journal record.
///
/// `date` is always `YYYY-MM-DD`, zero-padded, so the lexicographic order of
/// date strings is their chronological order. `mood` must belong to the
/// configured vocabulary at the time the entry is written; the vocabulary is
/// not enforced retroactively on records already on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub mood: String,
    #[serde(default)]
    pub notes: String,
    /// Polarity in [-1.0, 1.0], attached by the sentiment collaborator.
    /// Not required for store correctness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

/// Optional constraints applied when reading entries.
///
/// Constraints compose by conjunction. An absent or empty field imposes no
/// constraint, and the mood sentinel [`MOOD_ALL`] keeps every mood.
#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
    /// Keep entries with `date >= start_date`.
    pub start_date: Option<String>,
    /// Keep entries with `date <= end_date`.
    pub end_date: Option<String>,
    /// Keep entries with exactly this mood.
    pub mood: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(start) = non_empty(&self.start_date) {
            if entry.date.as_str() < start {
                return false;
            }
        }
        if let Some(end) = non_empty(&self.end_date) {
            if entry.date.as_str() > end {
                return false;
            }
        }
        if let Some(mood) = non_empty(&self.mood) {
            if mood != MOOD_ALL && entry.mood != mood {
                return false;
            }
        }
        true
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Why a load discarded the file contents and reinitialized the journal.
///
/// This never aborts the caller; it is handed back alongside the opened
/// store so the presentation layer can surface it as a warning.
#[derive(Debug, Error)]
pub enum LoadWarning {
    #[error("could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid journal file: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}
