//! Core types for the meetmate ecosystem.
//!
//! This crate provides the pure free-slot engine and the value types it
//! operates on:
//! - `Interval` for busy and free time ranges
//! - `free_slots` for inverting busy time against a daily work window
//! - `agenda` for driving the inversion across a date range
//!
//! Everything here is synchronous and side-effect free. Fetching busy
//! intervals from a calendar provider lives in the provider crates.

pub mod agenda;
pub mod date_range;
pub mod error;
pub mod free_slots;
pub mod interval;
pub mod work_window;

// Re-export the main types at crate root for convenience
pub use agenda::{SlotQuery, free_slots_in_range};
pub use date_range::{DateRange, parse_time_zone};
pub use error::{AgendaError, AgendaResult};
pub use free_slots::invert_busy_to_free;
pub use interval::Interval;
pub use work_window::WorkWindow;
