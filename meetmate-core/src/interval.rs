//! Interval value type shared by busy sets and free slots.
//!
//! Instants are `NaiveDateTime`: the engine works on already-localized
//! times and never converts between timezones itself. Localization happens
//! once, at the provider boundary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)`.
///
/// An interval whose end is not after its start covers no time. Such
/// intervals are accepted (busy data arrives from outside and is not
/// trusted to be well-formed) but contribute nothing anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Interval { start, end }
    }

    /// Length in whole minutes. Zero for empty or reversed intervals.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }

    /// True when the interval covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when any part of `self` falls inside `other`.
    /// Touching endpoints do not count as overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Restrict the interval to the bounds of `window`.
    /// The result may be empty when there is no overlap.
    pub fn clip(&self, window: &Interval) -> Interval {
        Interval {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        }
    }
}
