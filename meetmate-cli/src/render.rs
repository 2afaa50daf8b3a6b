//! Terminal rendering for free slots.
//!
//! Slots arrive in chronological order and never cross a day boundary, so
//! rendering groups them under one heading per day.

use chrono::NaiveDate;
use owo_colors::OwoColorize;

use meetmate_core::Interval;

/// Render slots as day headings with indented time ranges.
pub fn render_slots(slots: &[Interval]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for slot in slots {
        let day = slot.start.date();
        if current_day != Some(day) {
            if current_day.is_some() {
                lines.push(String::new());
            }
            lines.push(day.format("%Y-%m-%d (%a)").to_string().bold().to_string());
            current_day = Some(day);
        }

        let time = format!(
            "{} - {}",
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M")
        );
        let length = format!("({} min)", slot.duration_minutes());
        lines.push(format!("   {} {}", time, length.dimmed()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn slots_are_grouped_by_day() {
        let slots = vec![
            Interval::new(at(2, 10, 0), at(2, 12, 0)),
            Interval::new(at(2, 13, 0), at(2, 18, 0)),
            Interval::new(at(3, 10, 0), at(3, 18, 0)),
        ];

        let lines = render_slots(&slots);

        // Two day headings, three slot lines, one blank separator
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("2025-06-02"));
        assert!(lines[1].contains("10:00 - 12:00"));
        assert!(lines[2].contains("13:00 - 18:00"));
        assert!(lines[3].is_empty());
        assert!(lines[4].contains("2025-06-03"));
        assert!(lines[5].contains("10:00 - 18:00"));
    }

    #[test]
    fn no_slots_renders_nothing() {
        assert!(render_slots(&[]).is_empty());
    }
}
