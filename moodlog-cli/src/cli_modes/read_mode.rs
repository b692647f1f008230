use anyhow::Result;
use moodlog_core::{EntryFilter, JournalStore};

use crate::cli::Style;
use crate::render::Renderer;

pub fn read_mode(
    from: Option<String>,
    to: Option<String>,
    mood: Option<String>,
    count: bool,
    style: Style,
    store: &JournalStore,
    renderer: &Renderer,
) -> Result<()> {
    let filter = EntryFilter {
        start_date: from,
        end_date: to,
        mood,
    };
    let entries = store.get_entries(&filter);

    if count {
        renderer.print_info(&format!("{} entries found.", entries.len()));
        return Ok(());
    }
    if entries.is_empty() {
        renderer.print_info("No entries found.");
        return Ok(());
    }
    renderer.print_info(&format!("{} entries found.", entries.len()));
    renderer.print_entries(&entries, matches!(style, Style::Short));
    Ok(())
}
