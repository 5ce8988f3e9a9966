//! Store plumbing: collection (de)serialization, seeding and reset.
//!
//! The CRUD surface lives in [`crate::events`] and [`crate::media`]; this
//! module owns the two backing slots and the read/write contracts.  Reads
//! degrade to an empty collection on any failure — missing slot, backend
//! error or corrupt payload — so a damaged medium behaves like a first
//! run.  Writes return errors to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use moments_shared::constants::{EVENTS_KEY, MEDIA_KEY};

use crate::backend::StorageBackend;
use crate::error::Result;
use crate::models::{Event, MediaItem};
use crate::seed;

/// The persistence abstraction owning both collections.
pub struct Store<B: StorageBackend> {
    backend: B,
}

/// Collection counts and approximate on-medium footprint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoreStats {
    pub total_events: usize,
    pub total_media: usize,
    pub bytes_used: u64,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Seed empty slots with the demo dataset.  Idempotent: a slot that
    /// already holds data — even unparseable data — is never overwritten.
    pub fn initialize(&self) -> Result<()> {
        if self.backend.load(EVENTS_KEY)?.is_none() {
            self.persist_events(&seed::default_events())?;
            tracing::info!("seeded default events");
        }
        if self.backend.load(MEDIA_KEY)?.is_none() {
            let now = chrono::Utc::now().timestamp_millis();
            self.persist_media(&seed::default_media(now))?;
            tracing::info!("seeded default media");
        }
        Ok(())
    }

    /// Discard both collections and restore the demo dataset.
    ///
    /// Destructive; call sites are expected to gate this behind explicit
    /// user confirmation.
    pub fn reset_all(&self) -> Result<()> {
        self.backend.remove(EVENTS_KEY)?;
        self.backend.remove(MEDIA_KEY)?;
        tracing::warn!("store reset, all user data discarded");
        self.initialize()
    }

    /// Counts and approximate serialized size of both collections.
    pub fn stats(&self) -> StoreStats {
        let bytes_used = [EVENTS_KEY, MEDIA_KEY]
            .into_iter()
            .filter_map(|key| self.backend.load(key).ok().flatten())
            .map(|raw| raw.len() as u64)
            .sum();

        StoreStats {
            total_events: self.list_events().len(),
            total_media: self.list_media().len(),
            bytes_used,
        }
    }

    // ------------------------------------------------------------------
    // Collection plumbing
    // ------------------------------------------------------------------

    pub(crate) fn load_events(&self) -> Vec<Event> {
        self.load_collection(EVENTS_KEY)
    }

    pub(crate) fn persist_events(&self, events: &[Event]) -> Result<()> {
        self.persist_collection(EVENTS_KEY, events)
    }

    pub(crate) fn load_media(&self) -> Vec<MediaItem> {
        self.load_collection(MEDIA_KEY)
    }

    pub(crate) fn persist_media(&self, media: &[MediaItem]) -> Result<()> {
        self.persist_collection(MEDIA_KEY, media)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.backend.load(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(error) => {
                    tracing::warn!(key, %error, "corrupt collection, degrading to empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(key, %error, "unreadable collection, degrading to empty");
                Vec::new()
            }
        }
    }

    fn persist_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.store(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::new())
    }

    #[test]
    fn initialize_seeds_empty_backend() {
        let store = store();
        store.initialize().unwrap();

        assert_eq!(store.list_events().len(), 2);
        assert_eq!(store.list_media().len(), 4);
    }

    #[test]
    fn initialize_is_idempotent() {
        let store = store();
        store.initialize().unwrap();

        let events = store.list_events();
        let media = store.list_media();

        store.initialize().unwrap();
        assert_eq!(store.list_events(), events);
        assert_eq!(store.list_media(), media);
    }

    #[test]
    fn initialize_never_overwrites_existing_data() {
        let store = store();
        store.persist_events(&[]).unwrap();
        store.initialize().unwrap();

        // The empty-but-present events slot stays empty; only the missing
        // media slot is seeded.
        assert!(store.list_events().is_empty());
        assert_eq!(store.list_media().len(), 4);
    }

    #[test]
    fn corrupt_collection_degrades_to_empty() {
        let backend = MemoryBackend::new();
        backend.inject(EVENTS_KEY, "{not json");
        let store = Store::new(backend);

        assert!(store.list_events().is_empty());
    }

    #[test]
    fn corrupt_slot_does_not_disturb_the_other() {
        let backend = MemoryBackend::new();
        backend.inject(MEDIA_KEY, "][");
        let store = Store::new(backend);
        store.persist_events(&seed::default_events()).unwrap();

        assert_eq!(store.list_events().len(), 2);
        assert!(store.list_media().is_empty());
    }

    #[test]
    fn reset_restores_seed_dataset() {
        let store = store();
        store.initialize().unwrap();
        store.delete_event(&moments_shared::EventId::new("demo-wedding")).unwrap();
        assert_eq!(store.list_events().len(), 1);

        store.reset_all().unwrap();
        assert_eq!(store.list_events().len(), 2);
        assert_eq!(store.list_media().len(), 4);
    }

    #[test]
    fn stats_track_collection_sizes() {
        let store = store();
        store.initialize().unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.total_media, 4);
        assert!(stats.bytes_used > 0);

        store.delete_event(&moments_shared::EventId::new("demo-wedding")).unwrap();
        let after = store.stats();
        assert_eq!(after.total_events, 1);
        assert_eq!(after.total_media, 1);
        assert!(after.bytes_used < stats.bytes_used);
    }

    #[test]
    fn file_backed_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = Store::new(crate::backend::FileBackend::open_at(dir.path()).unwrap());
            store.initialize().unwrap();
        }

        let reopened = Store::new(crate::backend::FileBackend::open_at(dir.path()).unwrap());
        assert_eq!(reopened.list_events().len(), 2);
        assert_eq!(reopened.list_media().len(), 4);
    }
}
