use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domains::comparison::ComparisonError;
use crate::domains::intake::IntakeError;

/// Body message for every failed search.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch comparison data";

/// Any failure of `POST /search`.
///
/// All variants render the same 500 response; details stay in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, details = ?self, "Search request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": GENERIC_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
