//! Free-slot extraction endpoint
//!
//! Runs the whole pipeline for one request: a single freeBusy lookup,
//! then the per-day inversion across the requested date range. A failed
//! lookup aborts before any slot is computed.

use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
use serde::{Deserialize, Serialize};

use meetmate_core::{
    DateRange, Interval, SlotQuery, WorkWindow, free_slots_in_range, parse_time_zone,
};
use meetmate_provider_google::BusyQuery;

use crate::routes::{AppError, DEFAULT_TIME_ZONE, bearer_token};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/slots", post(slots))
}

/// Request body for slot extraction
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsRequest {
    /// First day of the range (YYYY-MM-DD)
    pub from: String,
    /// Last day of the range, inclusive (YYYY-MM-DD)
    pub to: String,
    /// Start of the daily work window (HH:MM)
    pub work_start: String,
    /// End of the daily work window (HH:MM)
    pub work_end: String,
    /// Minimum slot length in minutes
    pub min_duration_minutes: i64,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub calendars: Vec<String>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub slots: Vec<Interval>,
}

/// POST /slots - compute free slots across the requested date range
async fn slots(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SlotsRequest>,
) -> Result<Json<SlotsResponse>, AppError> {
    let token = bearer_token(&headers)?;

    let range = DateRange::from_args(&req.from, &req.to)?;
    let window = WorkWindow::from_args(&req.work_start, &req.work_end)?;
    let time_zone = parse_time_zone(req.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE))?;

    let (time_min, time_max) = range.fetch_bounds(time_zone);
    let busy = state
        .freebusy
        .fetch_busy(
            &token,
            &BusyQuery {
                time_min,
                time_max,
                time_zone,
                calendars: req.calendars,
            },
        )
        .await?;

    let query = SlotQuery {
        range,
        window,
        min_duration_minutes: req.min_duration_minutes,
    };
    let slots = free_slots_in_range(&query, &busy.merged());

    Ok(Json(SlotsResponse { slots }))
}
