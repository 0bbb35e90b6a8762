//! Comparison endpoint.
//!
//! POST /search (multipart/form-data)
//!
//! Fields: `searchText` (string), `platforms` (JSON array of vendor names),
//! `image` (single file). Responds with the comparison JSON, or a generic 500.

use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart},
    Json,
};
use tokio_util::sync::CancellationToken;

use crate::domains::comparison::ComparisonResult;
use crate::domains::intake::{read_comparison_request, IntakeError};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn search_handler(
    Extension(state): Extension<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let multipart = multipart.map_err(IntakeError::from)?;

    // Cancelled when this future is dropped, e.g. on client disconnect.
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    // Owns the uploaded file; it is removed when `request` goes out of scope.
    let request = read_comparison_request(multipart, &state.upload_dir).await?;

    let result = state.synthesizer.synthesize(&request, &cancel).await?;

    tracing::info!(
        search_text = %request.product_name,
        platforms = ?request.vendors,
        uploaded_file = ?request.image.as_ref().map(|i| (i.file_name(), i.mime_type(), i.size())),
        deals = result.deals.len(),
        "Search completed"
    );

    Ok(Json(result))
}
