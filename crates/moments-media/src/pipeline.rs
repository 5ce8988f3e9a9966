//! Sequential batch processing of selected files.

use std::sync::Arc;
use std::time::Duration;

use moments_shared::constants::ID_RETRY_ATTEMPTS;
use moments_shared::{EventId, MediaId};
use moments_store::{MediaItem, StorageBackend, Store, StoreError};

use crate::embed;
use crate::error::MediaError;
use crate::file::UploadFile;
use crate::progress::{BatchProgress, TransferProgress};
use crate::uploader::RemoteUploader;

/// Converts selected files into persisted media records, remote-first
/// with a guaranteed local fallback.
pub struct UploadPipeline {
    uploader: Box<dyn RemoteUploader + Send + Sync>,
    timeout: Duration,
}

/// What a finished batch produced.  `stored.len()` is the completion
/// signal callers use to surface the gallery.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Records persisted, in processing order.
    pub stored: Vec<MediaItem>,
    /// Files that could not be processed at all (unreadable source or
    /// failed persistence).
    pub failed: usize,
}

impl UploadPipeline {
    pub fn new(uploader: Box<dyn RemoteUploader + Send + Sync>, timeout: Duration) -> Self {
        Self { uploader, timeout }
    }

    /// Process `files` one at a time for `event_id`.
    ///
    /// Per file: classify by declared media type, try the remote uploader
    /// (when configured) under the timeout, fall back to local embedding,
    /// then persist one media record.  A file that fails remotely still
    /// lands locally; a file that cannot be read or persisted is counted
    /// in [`BatchOutcome::failed`] and the batch continues.
    pub async fn process<B: StorageBackend>(
        &self,
        store: &Store<B>,
        event_id: &EventId,
        files: &[UploadFile],
        uploader_name: Option<&str>,
        mut on_progress: impl FnMut(BatchProgress),
    ) -> BatchOutcome {
        let total = files.len();
        let mut outcome = BatchOutcome::default();

        for (index, file) in files.iter().enumerate() {
            on_progress(BatchProgress {
                current: index,
                total,
            });

            let url = match self.resolve_url(file).await {
                Ok(url) => url,
                Err(error) => {
                    tracing::warn!(file = %file.file_name, %error, "file skipped");
                    outcome.failed += 1;
                    continue;
                }
            };

            let timestamp = chrono::Utc::now().timestamp_millis();
            let item = MediaItem {
                id: MediaId::generate(timestamp),
                event_id: event_id.clone(),
                url,
                kind: file.kind(),
                timestamp,
                caption: None,
                ai_description: None,
                uploader_name: uploader_name.map(str::to_string),
            };

            match create_with_retry(store, item) {
                Ok(item) => outcome.stored.push(item),
                Err(error) => {
                    tracing::warn!(file = %file.file_name, %error, "media not persisted");
                    outcome.failed += 1;
                }
            }
        }

        on_progress(BatchProgress {
            current: total,
            total,
        });

        tracing::info!(
            event_id = %event_id,
            stored = outcome.stored.len(),
            failed = outcome.failed,
            "upload batch finished"
        );
        outcome
    }

    /// Remote URL when the uploader is configured and succeeds within the
    /// timeout; embedded `data:` URI otherwise.
    async fn resolve_url(&self, file: &UploadFile) -> Result<String, MediaError> {
        if self.uploader.is_configured() {
            let progress = Arc::new(TransferProgress::new());
            match tokio::time::timeout(self.timeout, self.uploader.upload(file, progress)).await {
                Ok(Ok(remote)) => return Ok(remote.url),
                Ok(Err(error)) => {
                    tracing::warn!(file = %file.file_name, %error, "remote upload failed, embedding locally");
                }
                Err(_) => {
                    tracing::warn!(file = %file.file_name, timeout = ?self.timeout, "remote upload timed out, embedding locally");
                }
            }
        }

        embed::embed_file(file).await
    }
}

/// Persist the item, regenerating the id on a collision (bounded
/// attempts).
fn create_with_retry<B: StorageBackend>(
    store: &Store<B>,
    mut item: MediaItem,
) -> Result<MediaItem, StoreError> {
    let mut attempts = ID_RETRY_ATTEMPTS;
    loop {
        match store.create_media(&item) {
            Ok(()) => return Ok(item),
            Err(StoreError::DuplicateId(id)) if attempts > 1 => {
                attempts -= 1;
                tracing::debug!(%id, "media id collision, regenerating");
                item.id = MediaId::generate(item.timestamp);
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploader::RemoteUpload;
    use async_trait::async_trait;
    use moments_store::MemoryBackend;

    struct FailingUploader;

    #[async_trait]
    impl RemoteUploader for FailingUploader {
        fn is_configured(&self) -> bool {
            true
        }

        async fn upload(
            &self,
            _file: &UploadFile,
            _progress: Arc<TransferProgress>,
        ) -> crate::error::Result<RemoteUpload> {
            Err(MediaError::Upload("503: service unavailable".into()))
        }
    }

    struct UnconfiguredUploader;

    #[async_trait]
    impl RemoteUploader for UnconfiguredUploader {
        fn is_configured(&self) -> bool {
            false
        }

        async fn upload(
            &self,
            _file: &UploadFile,
            _progress: Arc<TransferProgress>,
        ) -> crate::error::Result<RemoteUpload> {
            panic!("upload must not be attempted when unconfigured");
        }
    }

    struct StallingUploader;

    #[async_trait]
    impl RemoteUploader for StallingUploader {
        fn is_configured(&self) -> bool {
            true
        }

        async fn upload(
            &self,
            _file: &UploadFile,
            _progress: Arc<TransferProgress>,
        ) -> crate::error::Result<RemoteUpload> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("sleep outlives every test timeout");
        }
    }

    struct FixedUploader;

    #[async_trait]
    impl RemoteUploader for FixedUploader {
        fn is_configured(&self) -> bool {
            true
        }

        async fn upload(
            &self,
            file: &UploadFile,
            _progress: Arc<TransferProgress>,
        ) -> crate::error::Result<RemoteUpload> {
            Ok(RemoteUpload {
                url: format!("https://cdn.example.com/{}", file.file_name),
            })
        }
    }

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::new())
    }

    fn write_file(dir: &tempfile::TempDir, name: &str) -> UploadFile {
        let path = dir.path().join(name);
        std::fs::write(&path, b"test-bytes").unwrap();
        UploadFile::from_path(path)
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_embedding() {
        let dir = tempfile::tempdir().unwrap();
        let store = store();
        let pipeline = UploadPipeline::new(Box::new(FailingUploader), Duration::from_secs(5));

        let outcome = pipeline
            .process(
                &store,
                &EventId::new("e1"),
                &[write_file(&dir, "a.jpg")],
                None,
                |_| {},
            )
            .await;

        assert_eq!(outcome.stored.len(), 1);
        assert_eq!(outcome.failed, 0);
        assert!(outcome.stored[0].url.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn unconfigured_uploader_embeds_without_remote_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store();
        let pipeline = UploadPipeline::new(Box::new(UnconfiguredUploader), Duration::from_secs(5));

        let outcome = pipeline
            .process(
                &store,
                &EventId::new("e1"),
                &[write_file(&dir, "a.png")],
                Some("Guest"),
                |_| {},
            )
            .await;

        assert_eq!(outcome.stored.len(), 1);
        assert!(outcome.stored[0].url.starts_with("data:image/png;base64,"));
        assert_eq!(outcome.stored[0].uploader_name.as_deref(), Some("Guest"));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_expiry_falls_back_to_embedding() {
        let dir = tempfile::tempdir().unwrap();
        let store = store();
        let pipeline = UploadPipeline::new(Box::new(StallingUploader), Duration::from_millis(50));

        let outcome = pipeline
            .process(
                &store,
                &EventId::new("e1"),
                &[write_file(&dir, "slow.jpg")],
                None,
                |_| {},
            )
            .await;

        assert_eq!(outcome.stored.len(), 1);
        assert!(outcome.stored[0].url.starts_with("data:"));
    }

    #[tokio::test]
    async fn unreadable_file_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let store = store();
        let pipeline = UploadPipeline::new(Box::new(UnconfiguredUploader), Duration::from_secs(5));

        let files = vec![
            write_file(&dir, "first.jpg"),
            UploadFile::from_path(dir.path().join("missing.jpg")),
            write_file(&dir, "last.jpg"),
        ];

        let outcome = pipeline
            .process(&store, &EventId::new("e1"), &files, None, |_| {})
            .await;

        assert_eq!(outcome.stored.len(), 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(store.list_media_by_event(&EventId::new("e1")).len(), 2);
    }

    #[tokio::test]
    async fn batch_reports_progress_and_persists_remote_urls() {
        let dir = tempfile::tempdir().unwrap();
        let store = store();
        let pipeline = UploadPipeline::new(Box::new(FixedUploader), Duration::from_secs(5));

        let files = vec![write_file(&dir, "a.jpg"), write_file(&dir, "b.mp4")];
        let mut seen = Vec::new();

        let outcome = pipeline
            .process(&store, &EventId::new("e1"), &files, None, |p| {
                seen.push((p.current, p.total))
            })
            .await;

        assert_eq!(seen, vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(outcome.stored.len(), 2);
        assert_eq!(outcome.stored[0].url, "https://cdn.example.com/a.jpg");
        assert_eq!(
            outcome.stored[1].kind,
            moments_shared::MediaKind::Video
        );

        // Newest first in the canonical listing.
        let listed = store.list_media();
        assert_eq!(listed[0].id, outcome.stored[1].id);
    }
}
