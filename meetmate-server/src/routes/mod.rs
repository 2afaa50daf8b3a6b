pub mod freebusy;
pub mod slots;

use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use meetmate_core::AgendaError;
use meetmate_provider_google::FreeBusyError;

/// Timezone assumed when a request does not name one.
pub const DEFAULT_TIME_ZONE: &str = "Asia/Tokyo";

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can surface, mapped onto HTTP statuses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Upstream { status: u16, message: String },
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            // Upstream failures keep their original status where possible
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<FreeBusyError> for AppError {
    fn from(err: FreeBusyError) -> Self {
        match err {
            FreeBusyError::MissingToken => AppError::Unauthorized(err.to_string()),
            FreeBusyError::Upstream { status, message } => AppError::Upstream { status, message },
            FreeBusyError::Http(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Extract the bearer token from the Authorization header.
///
/// Checked before anything else so a missing credential fails ahead of
/// any parsing or fetching.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::Unauthorized("Missing access token".to_string())),
    }
}
