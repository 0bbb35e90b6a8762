use axum::extract::multipart::{MultipartError, MultipartRejection};
use thiserror::Error;

/// Failures while decoding the incoming form.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// `platforms` was not valid JSON
    #[error("Malformed platforms field: {0}")]
    Platforms(#[from] serde_json::Error),

    /// Body is not multipart/form-data
    #[error("Request is not a multipart form: {0}")]
    NotMultipart(#[from] MultipartRejection),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Uploaded image could not be stored
    #[error("Failed to store uploaded image: {0}")]
    Upload(#[from] std::io::Error),
}
