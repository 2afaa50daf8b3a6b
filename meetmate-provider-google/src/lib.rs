//! Google Calendar freeBusy provider for meetmate.
//!
//! This crate owns the single network boundary of the system: one
//! freeBusy lookup per request, authorized with a delegated bearer token
//! handed in by the caller. Fetched instants are localized into the query
//! timezone before the pure core ever sees them.
//!
//! Retry, timeout and cancellation policy belong to callers.

pub mod freebusy;
pub mod types;

pub use freebusy::{BusyQuery, BusySets, FreeBusyClient, FreeBusyError};
