//! The core `JournalStore` struct: sole owner of the journal file and the
//! authoritative in-memory copy of all entries.
//!
//! Every mutation pushes the full list back to disk; there is no append-only
//! log and no partial update. The backing file is assumed exclusively owned
//! by one running instance.

use super::csv::to_csv;
use super::entry::{Entry, EntryFilter, LoadWarning};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct JournalStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl JournalStore {
    /// Opens the store bound to `path`, creating the file (as an empty list)
    /// if it does not exist.
    ///
    /// Corrupt contents never abort the open: an unreadable or unparseable
    /// file, or one holding a record without `date` or `mood`, is discarded
    /// wholesale. The store then starts empty, rewrites the file, and hands
    /// back a [`LoadWarning`] describing what was thrown away. The only hard
    /// errors on this path are failing to create the file or failing the
    /// recovery rewrite, since neither leaves a usable store behind.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Option<LoadWarning>)> {
        let mut store = Self {
            path: path.into(),
            entries: Vec::new(),
        };

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        if !store.path.exists() {
            store
                .save()
                .with_context(|| format!("initializing {}", store.path.display()))?;
            return Ok((store, None));
        }

        let warning = store.load()?;
        Ok((store, warning))
    }

    /// Reads and parses the whole backing file. On any failure the file
    /// contents are discarded, the store resets to an empty list and the
    /// file is rewritten; the failure comes back as a warning value.
    fn load(&mut self) -> Result<Option<LoadWarning>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) => {
                let warning = LoadWarning::Unreadable {
                    path: self.path.clone(),
                    source,
                };
                self.reset()?;
                return Ok(Some(warning));
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                self.entries = entries;
                Ok(None)
            }
            Err(error) => {
                let warning = LoadWarning::Invalid {
                    path: self.path.clone(),
                    reason: error.to_string(),
                };
                self.reset()?;
                Ok(Some(warning))
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
            .with_context(|| format!("reinitializing {}", self.path.display()))
    }

    /// Serializes the full in-memory list to the backing file, overwriting
    /// it completely. Pretty-printing is cosmetic only.
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.entries).context("serializing journal entries")?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }

    /// Appends `entry` and persists.
    ///
    /// On a failed save the appended entry stays in the in-memory list;
    /// rolling it back is the caller's decision. This asymmetry with
    /// [`delete_entry`](Self::delete_entry) is deliberate.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        self.entries.push(entry);
        self.save()
    }

    /// Removes and returns the entry at `index` after a successful save.
    ///
    /// Out-of-range indices return `Ok(None)` and leave the store unchanged.
    /// If the save fails the removed entry is re-inserted at its original
    /// index before the error propagates, so in-memory and on-disk state
    /// never diverge after a failed delete.
    pub fn delete_entry(&mut self, index: usize) -> Result<Option<Entry>> {
        if index >= self.entries.len() {
            return Ok(None);
        }
        let removed = self.entries.remove(index);
        if let Err(error) = self.save() {
            self.entries.insert(index, removed);
            return Err(error);
        }
        Ok(Some(removed))
    }

    /// Returns a fresh snapshot of the in-memory list, filtered by `filter`.
    /// Never mutates the underlying list.
    pub fn get_entries(&self, filter: &EntryFilter) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect()
    }

    /// The unfiltered list in insertion order, for reports and exports.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empties the list and persists. Same failure semantics as [`save`](Self::save).
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    /// Copies the backing file's raw bytes to a backup file.
    ///
    /// Without an explicit `name` the backup lands next to the journal file
    /// as `journal_backup_YYYYMMDD_HHMMSS.json`. This is an explicit user
    /// action with no silent fallback, so failures propagate.
    pub fn backup_data(&self, name: Option<&str>) -> Result<PathBuf> {
        let target = match name {
            Some(name) => PathBuf::from(name),
            None => {
                let stamp = Local::now().format("%Y%m%d_%H%M%S");
                self.path
                    .with_file_name(format!("journal_backup_{stamp}.json"))
            }
        };
        fs::copy(&self.path, &target).with_context(|| {
            format!(
                "copying {} to {}",
                self.path.display(),
                target.display()
            )
        })?;
        Ok(target)
    }

    /// Replaces the journal with the contents of a backup file, validating
    /// it with the same record checks as a normal load.
    ///
    /// Returns the number of restored entries. On any failure (read, parse,
    /// or the final persist) the in-memory list is left exactly as it was;
    /// there is no partial restore.
    pub fn restore_data(&mut self, backup: &Path) -> Result<usize> {
        let raw = fs::read_to_string(backup)
            .with_context(|| format!("reading {}", backup.display()))?;
        let restored: Vec<Entry> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", backup.display()))?;

        let count = restored.len();
        let previous = std::mem::replace(&mut self.entries, restored);
        if let Err(error) = self.save() {
            self.entries = previous;
            return Err(error);
        }
        Ok(count)
    }

    /// Writes every entry, in store order, to `target` as CSV.
    /// Like backup, this is user-invoked and fails loudly.
    pub fn export_csv(&self, target: &Path) -> Result<()> {
        fs::write(target, to_csv(&self.entries))
            .with_context(|| format!("writing {}", target.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::tempdir;

    fn mk_entry(date: &str, mood: &str, notes: &str) -> Entry {
        Entry {
            date: date.to_string(),
            mood: mood.to_string(),
            notes: notes.to_string(),
            sentiment_score: None,
        }
    }

    fn mk_store() -> (JournalStore, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let (store, warning) = JournalStore::open(tmp.path().join("journal.json")).unwrap();
        assert!(warning.is_none());
        (store, tmp)
    }

    /// Swaps the backing file for a directory so every subsequent save fails.
    fn break_backing_file(store: &JournalStore) {
        fs::remove_file(store.path()).unwrap();
        fs::create_dir(store.path()).unwrap();
    }

    #[test]
    fn open_creates_missing_file_as_empty_list() {
        let (store, _tmp) = mk_store();
        assert!(store.is_empty());
        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn save_then_reopen_round_trips_entries_in_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");

        let (mut store, _) = JournalStore::open(&path).unwrap();
        store.add_entry(mk_entry("2024-01-02", "Sad", "rain")).unwrap();
        store.add_entry(mk_entry("2024-01-01", "Happy", "sun")).unwrap();
        let before = store.entries().to_vec();
        drop(store);

        let (reopened, warning) = JournalStore::open(&path).unwrap();
        assert!(warning.is_none());
        assert_eq!(reopened.entries(), before.as_slice());
    }

    #[test]
    fn add_entry_appends_at_the_end() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();
        let entry = mk_entry("2024-01-02", "Calm", "later");
        store.add_entry(entry.clone()).unwrap();

        let all = store.get_entries(&EntryFilter::default());
        assert_eq!(all.len(), 2);
        assert_eq!(all.last(), Some(&entry));
        assert_eq!(all.iter().filter(|e| **e == entry).count(), 1);
    }

    #[test]
    fn delete_entry_removes_exactly_the_indexed_entry() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();
        store.add_entry(mk_entry("2024-01-02", "Sad", "")).unwrap();
        store.add_entry(mk_entry("2024-01-03", "Calm", "")).unwrap();

        let removed = store.delete_entry(1).unwrap().unwrap();
        assert_eq!(removed.mood, "Sad");
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].mood, "Happy");
        assert_eq!(store.entries()[1].mood, "Calm");
    }

    #[test]
    fn delete_entry_out_of_range_returns_none_and_changes_nothing() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();

        assert!(store.delete_entry(1).unwrap().is_none());
        assert!(store.delete_entry(usize::MAX).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_save_during_delete_rolls_the_entry_back() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();
        store.add_entry(mk_entry("2024-01-02", "Sad", "")).unwrap();
        break_backing_file(&store);

        assert!(store.delete_entry(0).is_err());
        let all = store.get_entries(&EntryFilter::default());
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].mood, "Happy");
    }

    #[test]
    fn failed_save_during_add_leaves_the_entry_in_memory() {
        // The add/delete asymmetry: rollback after a failed add is the
        // caller's responsibility.
        let (mut store, _tmp) = mk_store();
        break_backing_file(&store);

        assert!(store.add_entry(mk_entry("2024-01-01", "Happy", "")).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_entries_filters_conjunctively() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2023-12-31", "Happy", "")).unwrap();
        store.add_entry(mk_entry("2024-01-10", "Happy", "")).unwrap();
        store.add_entry(mk_entry("2024-01-20", "Sad", "")).unwrap();
        store.add_entry(mk_entry("2024-02-01", "Happy", "")).unwrap();

        let filter = EntryFilter {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            mood: Some("Happy".to_string()),
        };
        let hits = store.get_entries(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, "2024-01-10");

        let all_moods = EntryFilter {
            mood: Some("All".to_string()),
            ..filter
        };
        assert_eq!(store.get_entries(&all_moods).len(), 2);
    }

    #[test]
    fn get_entries_returns_a_defensive_copy() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();

        let mut snapshot = store.get_entries(&EntryFilter::default());
        snapshot.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_json_resets_to_empty_with_a_warning() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(&path, "this is not json").unwrap();

        let (store, warning) = JournalStore::open(&path).unwrap();
        assert!(store.is_empty());
        assert!(matches!(warning, Some(LoadWarning::Invalid { .. })));

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn record_missing_mood_rejects_the_whole_load() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.json");
        fs::write(
            &path,
            r#"[{"date": "2024-01-01", "mood": "Happy"}, {"date": "2024-01-02", "notes": "x"}]"#,
        )
        .unwrap();

        let (store, warning) = JournalStore::open(&path).unwrap();
        // No partial recovery: the valid first record is discarded too.
        assert!(store.is_empty());
        assert!(matches!(warning, Some(LoadWarning::Invalid { .. })));
    }

    #[test]
    fn clear_all_data_empties_list_and_file() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();
        store.clear_all_data().unwrap();

        assert!(store.is_empty());
        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn backup_uses_the_timestamped_default_name() {
        let (mut store, _tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();

        let backup = store.backup_data(None).unwrap();
        let name = backup.file_name().unwrap().to_string_lossy();
        let pattern = Regex::new(r"^journal_backup_\d{8}_\d{6}\.json$").unwrap();
        assert!(pattern.is_match(&name), "unexpected backup name: {name}");

        let restored: Vec<Entry> =
            serde_json::from_str(&fs::read_to_string(&backup).unwrap()).unwrap();
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn backup_honors_an_explicit_name() {
        let (store, tmp) = mk_store();
        let target = tmp.path().join("named.json");
        let backup = store.backup_data(Some(target.to_str().unwrap())).unwrap();
        assert_eq!(backup, target);
        assert!(target.exists());
    }

    #[test]
    fn backup_of_a_missing_file_fails_loudly() {
        let (store, _tmp) = mk_store();
        fs::remove_file(store.path()).unwrap();
        assert!(store.backup_data(None).is_err());
    }

    #[test]
    fn restore_replaces_entries_and_persists() {
        let (mut store, tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();

        let backup = tmp.path().join("backup.json");
        fs::write(
            &backup,
            r#"[{"date": "2023-06-01", "mood": "Calm"}, {"date": "2023-06-02", "mood": "Tired"}]"#,
        )
        .unwrap();

        let count = store.restore_data(&backup).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].mood, "Calm");

        let raw = fs::read_to_string(store.path()).unwrap();
        let on_disk: Vec<Entry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk.len(), 2);
    }

    #[test]
    fn restore_failure_leaves_memory_untouched() {
        let (mut store, tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "")).unwrap();

        let bad = tmp.path().join("bad.json");
        fs::write(&bad, r#"[{"notes": "missing required keys"}]"#).unwrap();
        assert!(store.restore_data(&bad).is_err());

        let missing = tmp.path().join("nope.json");
        assert!(store.restore_data(&missing).is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].mood, "Happy");
    }

    #[test]
    fn export_csv_writes_the_unfiltered_list() {
        let (mut store, tmp) = mk_store();
        store.add_entry(mk_entry("2024-01-01", "Happy", "fine")).unwrap();
        store.add_entry(mk_entry("2024-01-02", "Sad", "meh")).unwrap();

        let target = tmp.path().join("out.csv");
        store.export_csv(&target).unwrap();

        let csv = fs::read_to_string(&target).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Mood,Notes");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"Happy\""));
    }
}
