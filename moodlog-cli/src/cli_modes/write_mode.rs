use anyhow::Result;
use chrono::Local;
use moodlog_core::sentiment::{LexiconModel, SentimentModel};
use moodlog_core::validate::{self, DATE_FORMAT};
use moodlog_core::{Config, Entry, JournalStore};

use super::editor::{compose_notes, resolve_editor};
use crate::render::Renderer;

/// Validates and records one new entry.
///
/// Notes come from the command line when given, otherwise from an editor
/// buffer. The notes are scored before the entry reaches the store, so the
/// stored record carries its sentiment from day one.
pub fn write_mode(
    date: Option<String>,
    mood: String,
    notes: Vec<String>,
    config: &Config,
    store: &mut JournalStore,
    renderer: &Renderer,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());

    let notes = if notes.is_empty() {
        let editor = resolve_editor(config.editor.as_deref());
        let buffer = compose_notes(&editor)?;
        if buffer.trim().is_empty() {
            renderer.print_info("No entry to save, because no notes were received.");
            return Ok(());
        }
        buffer.trim().to_string()
    } else {
        notes.join(" ")
    };

    let score = LexiconModel.score(&notes);
    let entry = Entry {
        date,
        mood,
        notes,
        sentiment_score: Some(score.polarity),
    };
    if let Err(reason) = validate::validate_entry(&entry, &config.moods) {
        anyhow::bail!("{reason}");
    }

    let saved_date = entry.date.clone();
    store.add_entry(entry)?;
    renderer.print_info(&format!("Entry added for {saved_date}."));
    Ok(())
}
