//! Housekeeping commands: delete, export, backup, restore, clear.

use anyhow::Result;
use moodlog_core::JournalStore;
use std::path::Path;

use crate::render::Renderer;

pub fn delete_mode(index: usize, store: &mut JournalStore, renderer: &Renderer) -> Result<()> {
    match store.delete_entry(index)? {
        Some(entry) => renderer.print_info(&format!("Deleted entry from {}.", entry.date)),
        None => renderer.print_info(&format!("No entry at index {index}.")),
    }
    Ok(())
}

pub fn export_mode(file: &Path, store: &JournalStore, renderer: &Renderer) -> Result<()> {
    store.export_csv(file)?;
    renderer.print_info(&format!(
        "Exported {} entries to {}.",
        store.len(),
        file.display()
    ));
    Ok(())
}

pub fn backup_mode(
    name: Option<String>,
    store: &JournalStore,
    renderer: &Renderer,
) -> Result<()> {
    let backup = store.backup_data(name.as_deref())?;
    renderer.print_info(&format!("Backup written to {}.", backup.display()));
    Ok(())
}

pub fn restore_mode(file: &Path, store: &mut JournalStore, renderer: &Renderer) -> Result<()> {
    let count = store.restore_data(file)?;
    renderer.print_info(&format!(
        "Restored {} entries from {}.",
        count,
        file.display()
    ));
    Ok(())
}

pub fn clear_mode(yes: bool, store: &mut JournalStore, renderer: &Renderer) -> Result<()> {
    if !yes {
        renderer.print_info("This deletes every entry. Re-run with --yes to confirm.");
        return Ok(());
    }
    store.clear_all_data()?;
    renderer.print_info("Journal cleared.");
    Ok(())
}
