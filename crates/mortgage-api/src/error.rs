//! HTTP error mapping.
//!
//! Client-fault domain errors become 400 responses carrying the exact
//! validation message; server faults become a generic 500 with the detail
//! kept in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use mortgage_core::error::Fault;
use mortgage_core::MortgageError;

/// Fallback message for faults the caller cannot act on.
const GENERIC_ERROR: &str = "Error calculating payment per payment schedule";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Mortgage(#[from] MortgageError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Mortgage(err) = self;
        let (status, error) = match err.fault() {
            Fault::Client => (StatusCode::BAD_REQUEST, err.to_string()),
            Fault::Server => {
                tracing::error!("payment calculation failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
