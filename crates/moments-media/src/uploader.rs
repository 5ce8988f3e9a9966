//! Remote media uploader: trait contract plus the HTTP implementation.
//!
//! The HTTP uploader speaks the unsigned-preset contract of the hosted
//! media CDN the original client used: a multipart POST carrying the file
//! stream, the preset name and a folder, answered with JSON that contains
//! the delivery URL under `secure_url`.  The uploader is best-effort by
//! contract — callers treat any failure as "fall back to local embedding".

use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::error::{MediaError, Result};
use crate::file::UploadFile;
use crate::progress::TransferProgress;

const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Preset name shipped in vendor documentation; treated as unconfigured.
const PLACEHOLDER_PRESET: &str = "docs_upload_example_us_preset";

/// Outcome of a successful remote upload.
#[derive(Debug, Clone)]
pub struct RemoteUpload {
    /// Delivery URL of the stored asset.
    pub url: String,
}

/// The external media host, behind a narrow seam so tests and the
/// pipeline can inject substitutes.
#[async_trait]
pub trait RemoteUploader {
    /// Whether the collaborator is usable at all.  When false the
    /// pipeline skips straight to local embedding.
    fn is_configured(&self) -> bool;

    /// Transmit one file, updating `progress` as bytes go out.
    async fn upload(
        &self,
        file: &UploadFile,
        progress: Arc<TransferProgress>,
    ) -> Result<RemoteUpload>;
}

/// Unsigned-preset multipart uploader.
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
    preset: String,
    folder: String,
}

impl HttpUploader {
    pub fn new(
        endpoint: impl Into<String>,
        preset: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            preset: preset.into(),
            folder: folder.into(),
        }
    }

    /// Rewrite a delivery URL to request width-bounded, auto-quality,
    /// auto-format delivery.
    pub fn optimized_url(url: &str, width: u32) -> String {
        url.replace("/upload/", &format!("/upload/w_{width},q_auto,f_auto/"))
    }
}

#[async_trait]
impl RemoteUploader for HttpUploader {
    fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.preset.is_empty() && self.preset != PLACEHOLDER_PRESET
    }

    async fn upload(
        &self,
        file: &UploadFile,
        progress: Arc<TransferProgress>,
    ) -> Result<RemoteUpload> {
        let size = tokio::fs::metadata(&file.path).await?.len();
        progress.bytes_total.store(size, Ordering::Relaxed);
        progress.bytes_done.store(0, Ordering::Relaxed);

        let source = tokio::fs::File::open(&file.path).await?;

        // Stream the file out chunk by chunk, bumping the shared counters
        // as each chunk is handed to the transport.
        let stream = futures::stream::unfold(
            (source, progress.clone()),
            |(mut source, progress)| async move {
                let mut buf = vec![0u8; UPLOAD_CHUNK_SIZE];
                match source.read(&mut buf).await {
                    Ok(0) => None,
                    Ok(n) => {
                        buf.truncate(n);
                        progress.bytes_done.fetch_add(n as u64, Ordering::Relaxed);
                        Some((
                            Ok::<_, std::io::Error>(bytes::Bytes::from(buf)),
                            (source, progress),
                        ))
                    }
                    Err(e) => Some((Err(e), (source, progress))),
                }
            },
        );

        let part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            size,
        )
        .file_name(file.file_name.clone())
        .mime_str(&file.media_type)?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.preset.clone())
            .text("folder", self.folder.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Upload(format!("{status}: {body}")));
        }

        let body: serde_json::Value = response.json().await?;
        let url = body
            .get("secure_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MediaError::Upload("response missing secure_url".into()))?
            .to_string();

        tracing::debug!(file = %file.file_name, size, %url, "remote upload complete");
        Ok(RemoteUpload { url })
    }
}
