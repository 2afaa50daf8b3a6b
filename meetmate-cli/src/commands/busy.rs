use anyhow::Result;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use meetmate_core::DateRange;
use meetmate_provider_google::{BusyQuery, FreeBusyClient};

use crate::tui::create_spinner;

pub async fn run(
    token: String,
    range: DateRange,
    time_zone: Tz,
    calendars: Vec<String>,
) -> Result<()> {
    let client = FreeBusyClient::new();
    let (time_min, time_max) = range.fetch_bounds(time_zone);

    let spinner = create_spinner("Fetching busy intervals...");
    let result = client
        .fetch_busy(
            &token,
            &BusyQuery {
                time_min,
                time_max,
                time_zone,
                calendars,
            },
        )
        .await;
    spinner.finish_and_clear();

    let busy = result?;

    // Stable output order across runs
    let mut ids: Vec<&String> = busy.calendars.keys().collect();
    ids.sort();

    for (i, id) in ids.iter().enumerate() {
        println!("📅 {}", id);

        let intervals = &busy.calendars[*id];
        if intervals.is_empty() {
            println!("   {}", "no busy time".dimmed());
        } else {
            for interval in intervals {
                // Spell out the end date only when the interval crosses midnight
                let end_format = if interval.start.date() == interval.end.date() {
                    "%H:%M"
                } else {
                    "%Y-%m-%d %H:%M"
                };
                println!(
                    "   {} - {}",
                    interval.start.format("%Y-%m-%d %H:%M"),
                    interval.end.format(end_format)
                );
            }
        }

        // Add spacing between calendars (but not after the last one)
        if i < ids.len() - 1 {
            println!();
        }
    }

    Ok(())
}
