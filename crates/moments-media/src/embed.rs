//! Local fallback: embed a file as a self-contained `data:` URI.
//!
//! This is the path every file can take — when no remote uploader is
//! configured, when the remote upload fails, or when it times out.  The
//! whole file is read into memory; for the demo-scale assets this system
//! handles that is acceptable.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;
use crate::file::UploadFile;

/// Read the file and produce `data:<media type>;base64,<payload>`.
pub async fn embed_file(file: &UploadFile) -> Result<String> {
    let bytes = tokio::fs::read(&file.path).await?;
    Ok(embed_bytes(&bytes, &file.media_type))
}

/// Encode already-loaded bytes as a `data:` URI.
pub fn embed_bytes(bytes: &[u8], media_type: &str) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}
