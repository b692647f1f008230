mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use moodlog_core::{Config, JournalStore};
use std::process::ExitCode;

use cli::{Cli, Command};
use render::{RenderOptions, Renderer};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moodlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.resolve(),
    }));

    // Printing the path must work even when the journal can't be opened.
    if let Command::Path = cli.command {
        println!("{}", config.journal_path.display());
        return Ok(());
    }

    let (mut store, warning) = JournalStore::open(&config.journal_path)?;
    if let Some(warning) = warning {
        renderer.print_warning(&format!("Starting with an empty journal: {warning}"));
    }

    match cli.command {
        Command::Add { date, mood, notes } => {
            cli_modes::write_mode(date, mood, notes, &config, &mut store, &renderer)
        }
        Command::List {
            from,
            to,
            mood,
            count,
            style,
        } => cli_modes::read_mode(from, to, mood, count, style, &store, &renderer),
        Command::Delete { index } => cli_modes::delete_mode(index, &mut store, &renderer),
        Command::Report { view } => cli_modes::report_mode(&view, &store, &renderer),
        Command::Trend => cli_modes::trend_mode(&store, &renderer),
        Command::Export { file } => cli_modes::export_mode(&file, &store, &renderer),
        Command::Backup { name } => cli_modes::backup_mode(name, &store, &renderer),
        Command::Restore { file } => cli_modes::restore_mode(&file, &mut store, &renderer),
        Command::Clear { yes } => cli_modes::clear_mode(yes, &mut store, &renderer),
        Command::Path => Ok(()), // handled above
    }
}
