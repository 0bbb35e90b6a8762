use std::path::Path;

use axum::extract::Multipart;

use super::{parse_platforms, persist_upload, ComparisonRequest, IntakeError};

/// MIME type assumed when the image part does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "application/octet-stream";

/// Read `searchText`, `platforms` and `image` from a multipart body.
///
/// Unknown fields are skipped. The image is passed through without inspection;
/// an image part with no file name and no bytes counts as no image.
pub async fn read_comparison_request(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> Result<ComparisonRequest, IntakeError> {
    let mut search_text = None;
    let mut platforms = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "searchText" => search_text = Some(field.text().await?),
            "platforms" => platforms = Some(field.text().await?),
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_IMAGE_MIME)
                    .to_string();
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;

                // An untouched file input arrives as a nameless, empty part.
                if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
                    tracing::debug!("Ignoring empty image field");
                    continue;
                }

                image = Some(persist_upload(upload_dir, &bytes, mime_type, file_name).await?);
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let vendors = parse_platforms(platforms.as_deref())?;

    Ok(ComparisonRequest {
        product_name: search_text.unwrap_or_default(),
        image,
        vendors,
    })
}
