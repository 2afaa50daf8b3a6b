//! Client for the Google Calendar freeBusy endpoint.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use meetmate_core::Interval;

use crate::types::{CalendarRef, FreeBusyRequest, FreeBusyResponse};

const FREEBUSY_URL: &str = "https://www.googleapis.com/calendar/v3/freeBusy";

/// Errors from a freeBusy lookup.
///
/// Upstream failures keep the status and body so callers can surface them
/// as-is; no partial busy data ever escapes a failed lookup.
#[derive(Error, Debug)]
pub enum FreeBusyError {
    #[error("Missing access token")]
    MissingToken,

    #[error("freeBusy lookup failed ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("freeBusy lookup failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Parameters for a single freeBusy lookup.
#[derive(Debug, Clone)]
pub struct BusyQuery {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub time_zone: Tz,
    /// Calendar ids to look up; empty means just the primary calendar.
    pub calendars: Vec<String>,
}

impl BusyQuery {
    /// The calendar ids actually sent upstream.
    pub fn calendar_ids(&self) -> Vec<String> {
        if self.calendars.is_empty() {
            vec!["primary".to_string()]
        } else {
            self.calendars.clone()
        }
    }
}

/// Busy intervals keyed by calendar id, localized to the query timezone.
///
/// Every requested calendar has an entry; one the upstream did not report
/// on (or reported with an empty list) holds no intervals.
#[derive(Debug, Clone, Default)]
pub struct BusySets {
    pub calendars: HashMap<String, Vec<Interval>>,
}

impl BusySets {
    /// Union of every calendar's busy intervals, sorted by start.
    ///
    /// Overlaps and duplicates across calendars are left in place; the
    /// free-slot sweep tolerates both.
    pub fn merged(&self) -> Vec<Interval> {
        let mut all: Vec<Interval> = self.calendars.values().flatten().copied().collect();
        all.sort_by_key(|b| (b.start, b.end));
        all
    }
}

/// HTTP client for the Google freeBusy API.
///
/// One lookup per overall request, issued ahead of any slot computation.
#[derive(Debug, Clone)]
pub struct FreeBusyClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for FreeBusyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeBusyClient {
    pub fn new() -> Self {
        FreeBusyClient {
            http: reqwest::Client::new(),
            base_url: FREEBUSY_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests, API proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        FreeBusyClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Perform a freeBusy lookup and return the upstream response as-is.
    pub async fn query(
        &self,
        token: &str,
        query: &BusyQuery,
    ) -> Result<FreeBusyResponse, FreeBusyError> {
        if token.is_empty() {
            return Err(FreeBusyError::MissingToken);
        }

        let body = FreeBusyRequest {
            time_min: query.time_min,
            time_max: query.time_max,
            time_zone: query.time_zone.to_string(),
            items: query
                .calendar_ids()
                .into_iter()
                .map(|id| CalendarRef { id })
                .collect(),
        };

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FreeBusyError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch busy intervals for every requested calendar, localized to the
    /// query timezone so the core can treat them as plain local instants.
    pub async fn fetch_busy(
        &self,
        token: &str,
        query: &BusyQuery,
    ) -> Result<BusySets, FreeBusyError> {
        let response = self.query(token, query).await?;
        Ok(localize(response, query.time_zone, &query.calendar_ids()))
    }
}

/// Convert fetched instants into naive local times in `tz`, one busy set
/// per requested calendar id.
fn localize(response: FreeBusyResponse, tz: Tz, requested: &[String]) -> BusySets {
    let mut sets = BusySets::default();

    for id in requested {
        let busy: Vec<Interval> = response
            .calendars
            .get(id)
            .map(|calendar| {
                calendar
                    .busy
                    .iter()
                    .map(|period| {
                        Interval::new(
                            period.start.with_timezone(&tz).naive_local(),
                            period.end.with_timezone(&tz).naive_local(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        sets.calendars.insert(id.clone(), busy);
    }

    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusyPeriod, CalendarBusy};
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    fn tokyo() -> Tz {
        "Asia/Tokyo".parse().unwrap()
    }

    fn local(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn response_with(id: &str, busy: Vec<BusyPeriod>) -> FreeBusyResponse {
        let mut calendars = HashMap::new();
        calendars.insert(
            id.to_string(),
            CalendarBusy {
                busy,
                errors: vec![],
            },
        );
        FreeBusyResponse {
            kind: None,
            time_min: None,
            time_max: None,
            calendars,
        }
    }

    #[test]
    fn localize_shifts_instants_into_the_query_timezone() {
        // 03:00 UTC is 12:00 in Tokyo
        let response = response_with(
            "primary",
            vec![BusyPeriod {
                start: Utc.with_ymd_and_hms(2025, 6, 2, 3, 0, 0).unwrap().into(),
                end: Utc.with_ymd_and_hms(2025, 6, 2, 4, 0, 0).unwrap().into(),
            }],
        );

        let sets = localize(response, tokyo(), &["primary".to_string()]);
        assert_eq!(
            sets.calendars["primary"],
            vec![Interval::new(local(2, 12, 0), local(2, 13, 0))]
        );
    }

    #[test]
    fn unreported_calendar_localizes_to_no_busy_time() {
        let response = response_with("primary", vec![]);
        let requested = vec!["primary".to_string(), "team@example.com".to_string()];

        let sets = localize(response, tokyo(), &requested);
        assert!(sets.calendars["primary"].is_empty());
        assert!(sets.calendars["team@example.com"].is_empty());
    }

    #[test]
    fn merged_unions_calendars_in_start_order() {
        let mut sets = BusySets::default();
        sets.calendars.insert(
            "a".to_string(),
            vec![Interval::new(local(2, 14, 0), local(2, 15, 0))],
        );
        sets.calendars.insert(
            "b".to_string(),
            vec![
                Interval::new(local(2, 9, 0), local(2, 10, 0)),
                Interval::new(local(2, 14, 30), local(2, 16, 0)),
            ],
        );

        let merged = sets.merged();
        assert_eq!(
            merged,
            vec![
                Interval::new(local(2, 9, 0), local(2, 10, 0)),
                Interval::new(local(2, 14, 0), local(2, 15, 0)),
                Interval::new(local(2, 14, 30), local(2, 16, 0)),
            ]
        );
    }

    #[test]
    fn default_calendar_is_primary() {
        let query = BusyQuery {
            time_min: Utc.with_ymd_and_hms(2025, 6, 1, 15, 0, 0).unwrap(),
            time_max: Utc.with_ymd_and_hms(2025, 6, 3, 15, 0, 0).unwrap(),
            time_zone: tokyo(),
            calendars: vec![],
        };
        assert_eq!(query.calendar_ids(), vec!["primary".to_string()]);
    }
}
