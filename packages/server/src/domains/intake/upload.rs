use std::path::Path;

use super::{IntakeError, UploadedImage};

/// Write an uploaded image into a fresh temporary file under `upload_dir`.
pub async fn persist_upload(
    upload_dir: &Path,
    bytes: &[u8],
    mime_type: impl Into<String>,
    file_name: Option<String>,
) -> Result<UploadedImage, IntakeError> {
    let file = tempfile::Builder::new()
        .prefix("upload-")
        .tempfile_in(upload_dir)?;

    tokio::fs::write(file.path(), bytes).await?;

    tracing::debug!(
        path = %file.path().display(),
        size = bytes.len(),
        "Stored uploaded image"
    );

    Ok(UploadedImage::new(file, mime_type, file_name, bytes.len()))
}
