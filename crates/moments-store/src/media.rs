//! CRUD operations for [`MediaItem`] records.

use moments_shared::{EventId, MediaId};

use crate::backend::StorageBackend;
use crate::error::{Result, StoreError};
use crate::models::MediaItem;
use crate::store::Store;

impl<B: StorageBackend> Store<B> {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert at the front of the collection so the newest upload surfaces
    /// first in any naive listing, then persist.
    ///
    /// A colliding id is rejected with [`StoreError::DuplicateId`].
    pub fn create_media(&self, item: &MediaItem) -> Result<()> {
        let mut media = self.load_media();

        if media.iter().any(|m| m.id == item.id) {
            return Err(StoreError::DuplicateId(item.id.to_string()));
        }

        media.insert(0, item.clone());
        self.persist_media(&media)?;

        tracing::debug!(media_id = %item.id, event_id = %item.event_id, "media created");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// All media items, most recent first.  Degrades to empty on read
    /// failure.
    pub fn list_media(&self) -> Vec<MediaItem> {
        self.load_media()
    }

    /// The subset of media belonging to one event, relative order
    /// preserved.
    pub fn list_media_by_event(&self, event_id: &EventId) -> Vec<MediaItem> {
        self.load_media()
            .into_iter()
            .filter(|m| &m.event_id == event_id)
            .collect()
    }

    /// Fetch a single media item by id.
    pub fn get_media(&self, id: &MediaId) -> Option<MediaItem> {
        self.load_media().into_iter().find(|m| &m.id == id)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the item with a matching id in place (e.g. to attach an AI
    /// description).  A silent no-op when the id is not present.
    pub fn update_media(&self, item: &MediaItem) -> Result<()> {
        let mut media = self.load_media();

        if let Some(slot) = media.iter_mut().find(|m| m.id == item.id) {
            *slot = item.clone();
            self.persist_media(&media)?;
            tracing::debug!(media_id = %item.id, "media updated");
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove a single media item by id.  Removing an absent id is a
    /// no-op.
    pub fn delete_media(&self, id: &MediaId) -> Result<()> {
        let mut media = self.load_media();
        media.retain(|m| &m.id != id);
        self.persist_media(&media)?;

        tracing::debug!(media_id = %id, "media deleted");
        Ok(())
    }
}
