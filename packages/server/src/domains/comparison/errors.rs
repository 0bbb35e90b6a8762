use std::time::Duration;

use gemini_client::GeminiError;
use thiserror::Error;

/// Failures of a single synthesis run.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// Vendor selection was not a list and the fallback policy is `reject`
    #[error("Vendor selection is not a list of names: {0}")]
    InvalidVendors(String),

    #[error("Failed to read uploaded image: {0}")]
    ImageRead(#[source] std::io::Error),

    /// Network, auth or quota failure from the model service
    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] GeminiError),

    #[error("Model call exceeded {0:?}")]
    Timeout(Duration),

    /// The originating request went away before the model answered
    #[error("Model call cancelled")]
    Cancelled,

    #[error("Model response is not valid JSON: {0}")]
    ResponseParse(#[source] serde_json::Error),

    #[error("Model response does not match the comparison schema: {0}")]
    SchemaViolation(String),
}

impl ComparisonError {
    /// Short error class for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ComparisonError::InvalidVendors(_) => "input",
            ComparisonError::ImageRead(_) => "image_read",
            ComparisonError::ModelInvocation(_) => "model_invocation",
            ComparisonError::Timeout(_) => "timeout",
            ComparisonError::Cancelled => "cancelled",
            ComparisonError::ResponseParse(_) => "response_parse",
            ComparisonError::SchemaViolation(_) => "schema_violation",
        }
    }
}
