//! Guest upload commands.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use moments_assist::fallback_description;
use moments_media::{BatchProgress, UploadFile};
use moments_shared::constants::UPLOAD_REDIRECT_DELAY_MS;
use moments_shared::{EventId, MediaId, MediaKind};
use moments_store::{MediaItem, StorageBackend};

use crate::error::AppError;
use crate::router::Route;
use crate::state::AppState;

/// What an upload batch produced, plus where to send the guest next.
#[derive(Debug)]
pub struct UploadSummary {
    /// Records persisted, in processing order.
    pub stored: Vec<MediaItem>,
    /// Files that could not be processed.
    pub failed: usize,
    /// Route surfacing the result once the batch is done.
    pub redirect: Route,
}

impl<B: StorageBackend> AppState<B> {
    /// Run the upload pipeline for `event_id`, describe the stored
    /// images, and return the summary after the fixed surface delay.
    ///
    /// The target event must exist; per-file failures are contained by
    /// the pipeline and reported in the summary.
    pub async fn upload(
        &self,
        event_id: &EventId,
        files: &[UploadFile],
        uploader_name: Option<&str>,
        on_progress: impl FnMut(BatchProgress),
    ) -> Result<UploadSummary, AppError> {
        if self.store.get_event(event_id).is_none() {
            return Err(AppError::EventNotFound(event_id.clone()));
        }

        let outcome = self
            .pipeline
            .process(&self.store, event_id, files, uploader_name, on_progress)
            .await;

        // Descriptions arrive after the records exist; the gallery view
        // picks them up on its next refetch.
        for item in &outcome.stored {
            if item.kind == MediaKind::Image {
                if let Err(error) = self.describe_media(&item.id).await {
                    tracing::warn!(media_id = %item.id, %error, "description skipped");
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(UPLOAD_REDIRECT_DELAY_MS)).await;

        Ok(UploadSummary {
            stored: outcome.stored,
            failed: outcome.failed,
            redirect: Route::EventAdmin(event_id.clone()),
        })
    }

    /// Attach an AI description to an image item.
    ///
    /// Only embedded images carry their bytes with them; remote URLs and
    /// analyzer failures get the generic fallback phrase.  Video items
    /// are returned untouched.
    pub async fn describe_media(&self, id: &MediaId) -> Result<MediaItem, AppError> {
        let mut item = self
            .store
            .get_media(id)
            .ok_or_else(|| AppError::MediaNotFound(id.clone()))?;

        if item.kind != MediaKind::Image {
            return Ok(item);
        }

        let description = match decode_data_uri(&item.url) {
            Some((bytes, media_type)) => self.analyzer.analyze_image(&bytes, &media_type).await,
            None => fallback_description(),
        };

        item.ai_description = Some(description);
        self.store.update_media(&item)?;
        Ok(item)
    }
}

/// Split a `data:<media type>;base64,<payload>` URI back into bytes and
/// media type.  Anything else (remote URLs, malformed payloads) is
/// `None`.
fn decode_data_uri(url: &str) -> Option<(Vec<u8>, String)> {
    let rest = url.strip_prefix("data:")?;
    let (media_type, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((bytes, media_type.to_string()))
}
