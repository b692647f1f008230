pub mod config;
pub mod journal;
pub mod report;
pub mod sentiment;
pub mod validate;

pub use config::Config;
pub use journal::{Entry, EntryFilter, JournalStore, LoadWarning};
