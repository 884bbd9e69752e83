//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way:
//!
//! - validation: `400 { "error": "Invalid data", "details": [...] }`
//! - other bad requests: `400 { "error": "<message>" }`
//! - missing records: `404 { "error": "<Entity> not found" }`
//! - storage failures: `500 { "error": "Failed to <operation>" }`, with the
//!   underlying report logged rather than returned

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use timetable_core::errors::ScheduleError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use timetable_api::middleware::error_handling::AppError;
/// use timetable_core::errors::ScheduleError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(ScheduleError::NotFound("Teacher").into());
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) | ScheduleError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = match self.0 {
            ScheduleError::Validation(details) => json!({ "error": message, "details": details }),
            ScheduleError::Storage { source, .. } => {
                error!("{}: {:?}", message, source);
                json!({ "error": message })
            }
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

/// Allows `?` on [`ScheduleError`] results inside handlers.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// A body that is not JSON, or has no JSON content type, is a bad request
/// like any other malformed payload.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ScheduleError::BadRequest(rejection.body_text()))
    }
}

/// Maps a ScheduleError straight to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
