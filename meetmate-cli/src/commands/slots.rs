use anyhow::Result;
use chrono_tz::Tz;

use meetmate_core::{DateRange, SlotQuery, WorkWindow, free_slots_in_range};
use meetmate_provider_google::{BusyQuery, FreeBusyClient};

use crate::render::render_slots;
use crate::tui::create_spinner;

pub async fn run(
    token: String,
    range: DateRange,
    window: WorkWindow,
    duration: i64,
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

    let query = SlotQuery {
        range,
        window,
        min_duration_minutes: duration,
    };
    let slots = free_slots_in_range(&query, &busy.merged());

    if slots.is_empty() {
        println!("No free slots of at least {} minutes found.", duration);
        return Ok(());
    }

    for line in render_slots(&slots) {
        println!("{}", line);
    }

    Ok(())
}
