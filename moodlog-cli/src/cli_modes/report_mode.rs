use anyhow::Result;
use moodlog_core::JournalStore;
use moodlog_core::report;
use moodlog_core::sentiment;

use crate::cli::ReportView;
use crate::render::Renderer;

pub fn report_mode(view: &ReportView, store: &JournalStore, renderer: &Renderer) -> Result<()> {
    let entries = store.entries();
    if entries.is_empty() {
        renderer.print_info("No entries to report on.");
        return Ok(());
    }

    match view {
        ReportView::Freq => {
            renderer.print_frequency(&report::mood_frequencies(entries));
        }
        ReportView::Timeline => {
            renderer.print_timeline(&report::mood_timeline(entries));
        }
        ReportView::Weekly => {
            let buckets = report::weekly_counts(entries)?;
            renderer.print_grouped("Weekly Summary Report", "Week", &buckets);
        }
        ReportView::Monthly => {
            let buckets = report::monthly_counts(entries)?;
            renderer.print_grouped("Monthly Summary Report", "Month", &buckets);
        }
    }
    Ok(())
}

pub fn trend_mode(store: &JournalStore, renderer: &Renderer) -> Result<()> {
    let avg = sentiment::recent_trend(store.entries());
    let label = sentiment::suggest(avg);
    renderer.print_trend(avg, label);
    Ok(())
}
