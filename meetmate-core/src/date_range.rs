//! Inclusive date range driving the per-day slot computation.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{AgendaError, AgendaResult};

/// An inclusive pair of calendar dates.
///
/// A range whose `to` precedes `from` is empty: it iterates no days and
/// yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// Parse a pair of YYYY-MM-DD strings, e.g. from CLI flags or a
    /// request body.
    pub fn from_args(from: &str, to: &str) -> AgendaResult<Self> {
        Ok(DateRange {
            from: parse_date(from)?,
            to: parse_date(to)?,
        })
    }

    /// Iterate the calendar days of the range, both ends inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |d| *d <= self.to)
    }

    /// Bounds for the upstream busy query: local midnight at the start of
    /// `from` through local midnight after the end of `to`, resolved in
    /// `tz`. This over-fetches relative to the work window on purpose so
    /// the per-day filter sees every interval that could matter.
    pub fn fetch_bounds(&self, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_midnight(self.from, tz),
            local_midnight(self.to + Duration::days(1), tz),
        )
    }
}

/// Parse an IANA timezone identifier like "Asia/Tokyo".
pub fn parse_time_zone(s: &str) -> AgendaResult<Tz> {
    s.parse::<Tz>()
        .map_err(|_| AgendaError::UnknownTimeZone(s.to_string()))
}

fn parse_date(s: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AgendaError::InvalidDate(s.to_string()))
}

/// The instant at which `date` begins in `tz`.
///
/// Midnight can be skipped or doubled by a DST transition; this takes the
/// earliest instant that exists on that date.
fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_date_pair() {
        let range = DateRange::from_args("2025-06-02", "2025-06-04").unwrap();
        assert_eq!(range.from, date(2025, 6, 2));
        assert_eq!(range.to, date(2025, 6, 4));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(
            DateRange::from_args("06/02/2025", "2025-06-04"),
            Err(AgendaError::InvalidDate(_))
        ));
        assert!(matches!(
            DateRange::from_args("2025-06-02", "2025-13-40"),
            Err(AgendaError::InvalidDate(_))
        ));
    }

    #[test]
    fn days_are_inclusive_on_both_ends() {
        let range = DateRange::new(date(2025, 6, 2), date(2025, 6, 4));
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(
            days,
            vec![date(2025, 6, 2), date(2025, 6, 3), date(2025, 6, 4)]
        );
    }

    #[test]
    fn single_day_range_has_one_day() {
        let range = DateRange::new(date(2025, 6, 2), date(2025, 6, 2));
        assert_eq!(range.days().count(), 1);
    }

    #[test]
    fn reversed_range_is_empty() {
        let range = DateRange::new(date(2025, 6, 4), date(2025, 6, 2));
        assert_eq!(range.days().count(), 0);
    }

    #[test]
    fn fetch_bounds_cover_the_range_in_local_time() {
        let range = DateRange::new(date(2025, 6, 2), date(2025, 6, 3));
        let tz = parse_time_zone("Asia/Tokyo").unwrap();

        let (time_min, time_max) = range.fetch_bounds(tz);

        // JST is UTC+9, so local midnight is 15:00 UTC the previous day
        assert_eq!(
            time_min,
            Utc.with_ymd_and_hms(2025, 6, 1, 15, 0, 0).unwrap()
        );
        // time_max is midnight after the last day of the range
        assert_eq!(
            time_max,
            Utc.with_ymd_and_hms(2025, 6, 3, 15, 0, 0).unwrap()
        );
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert!(matches!(
            parse_time_zone("Mars/Olympus"),
            Err(AgendaError::UnknownTimeZone(_))
        ));
    }
}
