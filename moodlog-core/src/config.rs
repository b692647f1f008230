use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Mood vocabulary used when the config file doesn't define one.
pub const DEFAULT_MOODS: &[&str] = &[
    "Happy",
    "Sad",
    "Stressed",
    "Excited",
    "Calm",
    "Anxious",
    "Tired",
    "Energetic",
    "Neutral",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the JSON journal file.
    pub journal_path: PathBuf,
    /// Mood labels an entry is allowed to carry. Owned here and handed to
    /// collaborators as an immutable slice per operation.
    pub moods: Vec<String>,
    /// Display format for dates in CLI output. Stored dates are always
    /// `YYYY-MM-DD` regardless of this setting.
    pub date_format: String,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    journal_path: Option<PathBuf>,
    moods: Option<Vec<String>>,
    date_format: Option<String>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything the file leaves out.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            journal_path: None,
            moods: None,
            date_format: None,
            editor: None,
        });

        let journal_path = file_config
            .journal_path
            .unwrap_or_else(Self::default_journal_path);

        let moods = file_config.moods.unwrap_or_else(default_moods);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%Y-%m-%d".to_string());

        Ok(Self {
            journal_path,
            moods,
            date_format,
            editor: file_config.editor,
        })
    }

    /// Default journal file: `{data_dir}/moodlog/journal.json`
    /// - macOS:   `~/Library/Application Support/moodlog/journal.json`
    /// - Linux:   `$XDG_DATA_HOME/moodlog/journal.json` or `~/.local/share/moodlog/journal.json`
    /// - Windows: `%APPDATA%\moodlog\journal.json`
    fn default_journal_path() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("moodlog");
            p.push("journal.json");
            p
        } else {
            PathBuf::from("./moodlog/journal.json")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("moodlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("moodlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            journal_path: None,
            moods: None,
            date_format: None,
            editor: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// The default vocabulary as owned strings.
pub fn default_moods() -> Vec<String> {
    DEFAULT_MOODS.iter().map(|m| m.to_string()).collect()
}
