use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::render::ColorMode;

/// moodlog — mood journal with reports
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new entry (opens your editor when no notes are given).
    Add {
        /// Entry date (YYYY-MM-DD). Defaults to today.
        #[arg(long, short)]
        date: Option<String>,
        /// Mood label; must be one of the configured moods.
        #[arg(long, short)]
        mood: String,
        /// Free-text notes (e.g., `moodlog add -m Happy Long walk by the river`).
        notes: Vec<String>,
    },
    /// List entries, optionally filtered by date range and mood.
    List {
        /// Keep entries on or after this date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Keep entries on or before this date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
        /// Keep entries with this mood ("All" keeps every mood).
        #[arg(long, short)]
        mood: Option<String>,
        /// Prints only the count of matched entries.
        #[arg(long)]
        count: bool,
        /// Output style: "long" or "short". Short style shows one line per entry.
        #[arg(long, short, value_enum, env = "MOODLOG_STYLE", default_value_t = Style::Long)]
        style: Style,
    },
    /// Delete the entry at the given position (as numbered by `list`).
    Delete {
        index: usize,
    },
    /// Render aggregate report views.
    Report {
        #[command(subcommand)]
        view: ReportView,
    },
    /// Average sentiment over the most recent entries, with a suggestion.
    Trend,
    /// Export every entry to a CSV file.
    Export {
        file: PathBuf,
    },
    /// Copy the journal file to a backup.
    Backup {
        /// Backup file name. Defaults to journal_backup_<timestamp>.json
        /// next to the journal file.
        name: Option<String>,
    },
    /// Replace the journal with the contents of a backup file.
    Restore {
        file: PathBuf,
    },
    /// Delete every entry.
    Clear {
        /// Required confirmation.
        #[arg(long)]
        yes: bool,
    },
    /// Prints the journal file path.
    Path,
}

#[derive(Subcommand, Debug)]
pub enum ReportView {
    /// Mood frequency bar chart.
    Freq,
    /// Mood-over-time timeline.
    Timeline,
    /// Per-mood counts grouped by ISO calendar week.
    Weekly,
    /// Per-mood counts grouped by calendar month.
    Monthly,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Style {
    Long,
    Short,
}
