//! Error types for the meetmate ecosystem.

use thiserror::Error;

/// Errors that can occur when building agenda queries.
///
/// The slot computation itself is total: once a query is built, it cannot
/// fail on the shape of the busy data it is given.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimeZone(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
