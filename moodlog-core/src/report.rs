//! Derived report views over a snapshot of entries.
//!
//! Stateless and recomputed on demand; nothing here mutates the input.
//! Dates are assumed to have passed [`crate::validate::validate_date`] at
//! write time, so the grouping functions fail the whole report when they
//! meet a malformed one instead of skipping it silently.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::journal::Entry;
use crate::validate::DATE_FORMAT;

/// Occurrence count for one mood label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// One point of the mood-over-time series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: String,
    pub mood: String,
    /// Index into [`Timeline::moods`].
    pub level: usize,
}

/// Entries sorted ascending by date, projected to (date, mood) pairs.
///
/// `moods` holds the distinct moods of the series in first-seen order;
/// `level` on each point indexes into it, giving a stable bijection from
/// mood name to integer within one report generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    pub moods: Vec<String>,
    pub points: Vec<TimelinePoint>,
}

/// Exact occurrence counts per mood, in first-seen order of the input.
/// The counts always sum to `entries.len()`.
pub fn mood_frequencies(entries: &[Entry]) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Vec::new();
    for entry in entries {
        bump(&mut counts, &entry.mood);
    }
    counts
}

/// Chronological series of (date, mood) points.
///
/// The sort is stable: entries sharing a date keep their original relative
/// order. Date strings compare lexicographically, which is chronological
/// for the zero-padded `YYYY-MM-DD` format.
pub fn mood_timeline(entries: &[Entry]) -> Timeline {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut timeline = Timeline::default();
    for entry in sorted {
        let level = match timeline.moods.iter().position(|m| m == &entry.mood) {
            Some(level) => level,
            None => {
                timeline.moods.push(entry.mood.clone());
                timeline.moods.len() - 1
            }
        };
        timeline.points.push(TimelinePoint {
            date: entry.date.clone(),
            mood: entry.mood.clone(),
            level,
        });
    }
    timeline
}

/// Per-mood counts bucketed by ISO calendar week (`YYYY-Www`).
///
/// ISO weeks start on Monday and week 1 is the week containing the year's
/// first Thursday, so the week-year at the edges of January and December
/// may differ from the calendar year.
pub fn weekly_counts(entries: &[Entry]) -> Result<BTreeMap<String, Vec<MoodCount>>> {
    group_counts(entries, |date| {
        let week = date.iso_week();
        format!("{}-W{:02}", week.year(), week.week())
    })
}

/// Per-mood counts bucketed by calendar month (`YYYY-MM`).
pub fn monthly_counts(entries: &[Entry]) -> Result<BTreeMap<String, Vec<MoodCount>>> {
    group_counts(entries, |date| date.format("%Y-%m").to_string())
}

/// Buckets ascend by key; per-mood counts within a bucket keep first-seen
/// order. A malformed date fails the whole call.
fn group_counts(
    entries: &[Entry],
    bucket_key: impl Fn(NaiveDate) -> String,
) -> Result<BTreeMap<String, Vec<MoodCount>>> {
    let mut buckets: BTreeMap<String, Vec<MoodCount>> = BTreeMap::new();
    for entry in entries {
        let date = NaiveDate::parse_from_str(&entry.date, DATE_FORMAT)
            .with_context(|| format!("entry has a malformed date: {:?}", entry.date))?;
        bump(buckets.entry(bucket_key(date)).or_default(), &entry.mood);
    }
    Ok(buckets)
}

fn bump(counts: &mut Vec<MoodCount>, mood: &str) {
    match counts.iter_mut().find(|c| c.mood == mood) {
        Some(c) => c.count += 1,
        None => counts.push(MoodCount {
            mood: mood.to_string(),
            count: 1,
        }),
    }
}
