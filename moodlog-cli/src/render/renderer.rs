use super::theme::Calm;
use chrono::NaiveDate;
use moodlog_core::journal::Entry;
use moodlog_core::report::{MoodCount, Timeline};
use moodlog_core::sentiment::TrendLabel;
use moodlog_core::validate::DATE_FORMAT;
use std::collections::BTreeMap;
use termimad::{MadSkin, crossterm::style::Stylize};

/// Widest frequency bar, in cells.
const BAR_WIDTH: usize = 40;
/// How much of the notes a short entry line shows.
const NOTES_PREVIEW_LENGTH: usize = 50;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Calm::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%Y-%m-%d".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        println!("{message}");
    }

    pub fn print_warning(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", format!("Warning: {message}").with(Calm::ACCENT));
        } else {
            eprintln!("Warning: {message}");
        }
    }

    pub fn print_entries(&self, entries: &[Entry], short: bool) {
        for (i, entry) in entries.iter().enumerate() {
            if short {
                self.print_entry_line(i, entry);
                continue;
            }

            let heading = format!("## {}. {} - {}", i, self.display_date(&entry.date), entry.mood);
            let md = if entry.notes.trim().is_empty() {
                format!("{heading}\n")
            } else {
                format!("{heading}\n{}\n", entry.notes.trim_end())
            };
            self.print_md(&md);

            if i + 1 < entries.len() {
                self.print_md("---");
            }
        }
    }

    pub fn print_entry_line(&self, index: usize, entry: &Entry) {
        let mut date = entry.date.clone();
        let mut mood = entry.mood.clone();
        let preview = notes_preview(&entry.notes);
        if self.opts.use_color {
            date = date.with(Calm::PRIMARY).to_string();
            mood = mood.with(Calm::SECONDARY).to_string();
        }
        println!("{index:>3}  {date}  {mood}  {preview}");
    }

    pub fn print_frequency(&self, counts: &[MoodCount]) {
        self.print_md("# Mood Frequency Report");
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
        let label_width = counts.iter().map(|c| c.mood.len()).max().unwrap_or(0);
        for count in counts {
            let mut bar = bar(count.count, max, BAR_WIDTH);
            if self.opts.use_color {
                bar = bar.with(Calm::PRIMARY).to_string();
            }
            println!(
                "{:<label_width$}  {} {}",
                count.mood, bar, count.count
            );
        }
    }

    pub fn print_timeline(&self, timeline: &Timeline) {
        self.print_md("# Mood Timeline Report");
        for point in &timeline.points {
            let mut marker = "●".to_string();
            if self.opts.use_color {
                marker = marker.with(Calm::PRIMARY).to_string();
            }
            println!(
                "{}  {:pad$}{marker}  {}",
                point.date,
                "",
                point.mood,
                pad = point.level * 2
            );
        }
    }

    pub fn print_grouped(
        &self,
        title: &str,
        label: &str,
        buckets: &BTreeMap<String, Vec<MoodCount>>,
    ) {
        let mut md = format!("# {title}\n");
        for (key, counts) in buckets {
            md.push_str(&format!("\n## {label} {key}\n"));
            for count in counts {
                md.push_str(&format!("* {}: {} entries\n", count.mood, count.count));
            }
        }
        self.print_md(&md);
    }

    pub fn print_trend(&self, avg: f64, label: TrendLabel) {
        self.print_md(&format!(
            "# Sentiment Trend\nAverage recent sentiment: **{avg:.2}** ({})\n\n{}",
            label.as_ref(),
            label.suggestion()
        ));
    }

    /// Stored dates are `YYYY-MM-DD`; long output shows them in the
    /// configured display format. Anything unparseable is shown as-is.
    fn display_date(&self, date: &str) -> String {
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(|d| d.format(&self.opts.date_format).to_string())
            .unwrap_or_else(|_| date.to_string())
    }
}

fn notes_preview(notes: &str) -> String {
    let flat = notes.replace('\n', " ");
    let trimmed = flat.trim();
    if trimmed.chars().count() <= NOTES_PREVIEW_LENGTH {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(NOTES_PREVIEW_LENGTH).collect();
    format!("{}...", head.trim_end())
}

/// Scales `count` against `max` into at most `width` cells; any nonzero
/// count gets at least one cell.
fn bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).clamp(1, width);
    "█".repeat(cells)
}
