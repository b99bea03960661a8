//! HTTP mapping for the common error taxonomy
//!
//! Every error body has the shape `{"error": "<message>"}`. Validation and
//! not-found errors keep their distinct messages; store failures map to 503
//! so callers know a retry is safe.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookrec_common::Error;
use serde_json::json;
use tracing::error;

/// Wrapper giving `bookrec_common::Error` an HTTP response mapping
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidIdentifier(_)
            | Error::MissingRating
            | Error::InvalidRating
            | Error::MissingField(_) => StatusCode::BAD_REQUEST,
            Error::Unauthenticated | Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::DuplicateEmail(_) => StatusCode::CONFLICT,
            Error::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Io(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
