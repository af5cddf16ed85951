//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`pb_core::Error`] so that route handlers
//! can return `Result<T, AppError>` directly. Every error body has the shape
//! `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub pb_core::Error);

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<pb_core::Error> for AppError {
    fn from(e: pb_core::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.0,
                "Server error in API handler"
            );
        } else {
            tracing::debug!(status = %status, error = %self.0, "Request rejected");
        }

        let body = ErrorBody {
            detail: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
