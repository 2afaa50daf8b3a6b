//! Per-day driver: free slots across a whole date range.

use crate::date_range::DateRange;
use crate::free_slots::invert_busy_to_free;
use crate::interval::Interval;
use crate::work_window::WorkWindow;

/// Everything needed to turn a busy set into an agenda of free slots.
#[derive(Debug, Clone, Copy)]
pub struct SlotQuery {
    pub range: DateRange,
    pub window: WorkWindow,
    pub min_duration_minutes: i64,
}

/// Compute free slots for every day of the range, in day order.
///
/// `busy` is the full busy set for the whole range, already localized;
/// overlaps and duplicates are fine. Each day only sees the intervals that
/// touch its own work window, so no slot ever crosses a day boundary and
/// the combined output is chronologically non-decreasing.
pub fn free_slots_in_range(query: &SlotQuery, busy: &[Interval]) -> Vec<Interval> {
    let mut slots = Vec::new();

    for day in query.range.days() {
        let Some(window) = query.window.on(day) else {
            continue;
        };

        let day_busy: Vec<Interval> = busy
            .iter()
            .filter(|b| b.overlaps(&window))
            .copied()
            .collect();

        slots.extend(invert_busy_to_free(
            window.start,
            window.end,
            &day_busy,
            query.min_duration_minutes,
        ));
    }

    slots
}
