mod csv;
mod entry;
mod store;

pub use csv::to_csv;
pub use entry::{Entry, EntryFilter, LoadWarning, MOOD_ALL};
pub use store::JournalStore;
