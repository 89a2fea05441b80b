use chrono::NaiveDate;

use crate::models::{ActivityCounts, DateWindow, Lifecycle, LifecycleSummary};

/// Count records opened and closed inside the window. Timestamps are
/// compared by their UTC calendar date; both window bounds are inclusive.
pub fn count_opened_closed<T: Lifecycle>(records: &[T], window: DateWindow) -> ActivityCounts {
    let mut counts = ActivityCounts::default();
    for record in records {
        if window.contains(record.created_at().date_naive()) {
            counts.opened += 1;
        }
        if let Some(closed) = record.closed_at() {
            if window.contains(closed.date_naive()) {
                counts.closed += 1;
            }
        }
    }
    counts
}

/// Count records that sat open past their shelf life: created more than
/// `threshold_days` days (strictly) before `reference_end` and still open
/// on that date, where "still open" means no close at all or a close that
/// happened after it.
pub fn count_retired<T: Lifecycle>(
    records: &[T],
    reference_end: NaiveDate,
    threshold_days: i64,
) -> usize {
    records
        .iter()
        .filter(|record| {
            let age = (reference_end - record.created_at().date_naive()).num_days();
            let open_at_reference = match record.closed_at() {
                None => true,
                Some(closed) => closed.date_naive() > reference_end,
            };
            age > threshold_days && open_at_reference
        })
        .count()
}

/// Run both scans over one record kind, using the window's end date as the
/// retirement reference.
pub fn summarize<T: Lifecycle>(
    records: &[T],
    window: DateWindow,
    threshold_days: i64,
) -> LifecycleSummary {
    let counts = count_opened_closed(records, window);
    LifecycleSummary {
        opened: counts.opened,
        closed: counts.closed,
        retired: count_retired(records, window.until, threshold_days),
    }
}
