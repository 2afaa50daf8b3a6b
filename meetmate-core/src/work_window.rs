//! Daily work window: the portion of a calendar day open for meetings.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::interval::Interval;

/// A time-of-day pair applied to each day of a date range.
///
/// Crossing midnight is not supported: a window whose end is not after its
/// start contributes zero free slots for every day it is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        WorkWindow { start, end }
    }

    /// Parse a pair of "HH:MM" strings, e.g. from CLI flags or a request
    /// body.
    pub fn from_args(start: &str, end: &str) -> AgendaResult<Self> {
        Ok(WorkWindow {
            start: parse_time(start)?,
            end: parse_time(end)?,
        })
    }

    /// Project the window onto a calendar date.
    ///
    /// Returns `None` for an inverted or zero-length window, which is how
    /// a day with no available time is expressed.
    pub fn on(&self, date: NaiveDate) -> Option<Interval> {
        if self.start >= self.end {
            return None;
        }
        Some(Interval::new(
            date.and_time(self.start),
            date.and_time(self.end),
        ))
    }
}

fn parse_time(s: &str) -> AgendaResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| AgendaError::InvalidTime(s.to_string()))
}
