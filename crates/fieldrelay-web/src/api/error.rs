use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use fieldrelay_core::Error as CoreError;

/// Boundary error type: every taxonomy entry maps to exactly one status
/// code here, and every error body has the shape `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("No file provided")]
    MissingFile,

    #[error("Invalid multipart payload: {0}")]
    Multipart(#[from] MultipartError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Core(e) if e.is_bad_request() => StatusCode::BAD_REQUEST,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingFile | Self::Multipart(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
