//! CSV rendering for exports.
//!
//! Header line `Date,Mood,Notes`; one line per entry in store order; all
//! three fields double-quoted with internal `"` doubled.

use super::entry::Entry;

pub fn to_csv(entries: &[Entry]) -> String {
    let mut out = String::from("Date,Mood,Notes\n");
    for entry in entries {
        out.push_str(&format!(
            "\"{}\",\"{}\",\"{}\"\n",
            quote(&entry.date),
            quote(&entry.mood),
            quote(&entry.notes)
        ));
    }
    out
}

fn quote(field: &str) -> String {
    field.replace('"', "\"\"")
}
