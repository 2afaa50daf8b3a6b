//! Wire types for the Google Calendar freeBusy endpoint.
//!
//! Shapes follow `POST https://www.googleapis.com/calendar/v3/freeBusy`.
//! Response types also serialize so the server can pass a lookup result
//! through to its own callers unchanged.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Request body for a freeBusy lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyRequest {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub time_zone: String,
    pub items: Vec<CalendarRef>,
}

/// A calendar identifier entry in the request's `items` list.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarRef {
    pub id: String,
}

/// Response body of a freeBusy lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_min: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_max: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub calendars: HashMap<String, CalendarBusy>,
}

/// Busy intervals reported for one calendar.
///
/// A calendar the upstream could not expand carries `errors` instead of
/// busy entries; an empty busy list simply means no busy time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarBusy {
    #[serde(default)]
    pub busy: Vec<BusyPeriod>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<CalendarLookupError>,
}

/// One busy interval as reported by the upstream, offset included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BusyPeriod {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Per-calendar error entry in a freeBusy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarLookupError {
    pub domain: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = FreeBusyRequest {
            time_min: Utc.with_ymd_and_hms(2025, 6, 1, 15, 0, 0).unwrap(),
            time_max: Utc.with_ymd_and_hms(2025, 6, 3, 15, 0, 0).unwrap(),
            time_zone: "Asia/Tokyo".to_string(),
            items: vec![CalendarRef {
                id: "primary".to_string(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("timeMin").is_some());
        assert!(json.get("timeMax").is_some());
        assert_eq!(json["timeZone"], "Asia/Tokyo");
        assert_eq!(json["items"][0]["id"], "primary");
    }

    #[test]
    fn response_parses_a_google_body() {
        let body = r#"{
            "kind": "calendar#freeBusy",
            "timeMin": "2025-06-01T15:00:00.000Z",
            "timeMax": "2025-06-03T15:00:00.000Z",
            "calendars": {
                "primary": {
                    "busy": [
                        { "start": "2025-06-02T03:00:00Z", "end": "2025-06-02T04:00:00Z" }
                    ]
                },
                "team@example.com": {
                    "errors": [
                        { "domain": "global", "reason": "notFound" }
                    ],
                    "busy": []
                }
            }
        }"#;

        let response: FreeBusyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.kind.as_deref(), Some("calendar#freeBusy"));

        let primary = &response.calendars["primary"];
        assert_eq!(primary.busy.len(), 1);
        assert_eq!(
            primary.busy[0].start,
            Utc.with_ymd_and_hms(2025, 6, 2, 3, 0, 0).unwrap()
        );

        let team = &response.calendars["team@example.com"];
        assert!(team.busy.is_empty());
        assert_eq!(team.errors[0].reason, "notFound");
    }

    #[test]
    fn missing_calendars_key_parses_as_empty() {
        let response: FreeBusyResponse = serde_json::from_str("{}").unwrap();
        assert!(response.calendars.is_empty());
    }
}
