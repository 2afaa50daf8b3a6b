//! Inversion of busy intervals into free slots within a work window.

use chrono::NaiveDateTime;

use crate::interval::Interval;

/// Compute the free slots left in `[work_start, work_end)` once every busy
/// interval is taken out.
///
/// The busy input may arrive in any order and may contain overlapping or
/// duplicate entries; identical inputs always produce identical output.
/// Entries extending past the window are clipped to it, and entries whose
/// end is not after their start are treated as empty and ignored. Gaps
/// shorter than `min_duration_minutes` are dropped.
///
/// Returned slots are disjoint, ascending, and together with the
/// window-clipped busy intervals cover the window exactly.
pub fn invert_busy_to_free(
    work_start: NaiveDateTime,
    work_end: NaiveDateTime,
    busy: &[Interval],
    min_duration_minutes: i64,
) -> Vec<Interval> {
    let mut slots = Vec::new();

    // An inverted window means no available time that day, not an error.
    if work_start >= work_end {
        return slots;
    }

    // Reversed entries must not move the cursor, so drop them up front.
    // Stable sort keeps the result deterministic for tied starts.
    let mut sorted: Vec<Interval> = busy.iter().filter(|b| !b.is_empty()).copied().collect();
    sorted.sort_by_key(|b| b.start);

    let mut cursor = work_start;

    for entry in sorted {
        let start = entry.start.max(work_start);
        let end = entry.end.min(work_end);

        // Entirely outside the window
        if end <= work_start || start >= work_end {
            continue;
        }

        if start > cursor {
            let slot = Interval::new(cursor, start);
            if slot.duration_minutes() >= min_duration_minutes {
                slots.push(slot);
            }
        }

        if end > cursor {
            cursor = end;
        }
        if cursor >= work_end {
            break;
        }
    }

    if cursor < work_end {
        let slot = Interval::new(cursor, work_end);
        if slot.duration_minutes() >= min_duration_minutes {
            slots.push(slot);
        }
    }

    slots
}
