//! Launches the user's editor to compose entry notes.

use anyhow::{Context, Result, bail};
use std::{env, fs, process::Command};

/// Resolution order: configured editor, then $VISUAL, then $EDITOR, then vim.
pub fn resolve_editor(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| env::var("VISUAL").ok())
        .or_else(|| env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens an empty buffer in the editor and returns whatever was written.
pub fn compose_notes(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("moodlog-notes")
        .suffix(".txt")
        .tempfile()
        .context("creating notes buffer")?;

    let status = Command::new(editor_cmd)
        .arg(file.path())
        .status()
        .with_context(|| format!("launching {editor_cmd}"))?;
    if !status.success() {
        bail!("editor exited with status {status}");
    }
    Ok(fs::read_to_string(file.path())?)
}
