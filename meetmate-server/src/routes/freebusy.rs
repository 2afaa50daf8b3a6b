//! freeBusy proxy endpoint
//!
//! Forwards a lookup to the Google freeBusy API with the caller's own
//! delegated token and passes the per-calendar busy lists back unchanged,
//! including upstream error statuses.

use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use meetmate_core::parse_time_zone;
use meetmate_provider_google::BusyQuery;
use meetmate_provider_google::types::FreeBusyResponse;

use crate::routes::{AppError, DEFAULT_TIME_ZONE, bearer_token};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/freebusy", post(freebusy))
}

/// Request body for the freeBusy proxy
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyProxyRequest {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub calendars: Vec<String>,
}

/// POST /freebusy - look up busy intervals for the caller's calendars
async fn freebusy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<FreeBusyProxyRequest>,
) -> Result<Json<FreeBusyResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let time_zone = parse_time_zone(req.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE))?;

    let query = BusyQuery {
        time_min: req.time_min,
        time_max: req.time_max,
        time_zone,
        calendars: req.calendars,
    };

    let response = state.freebusy.query(&token, &query).await?;
    Ok(Json(response))
}
