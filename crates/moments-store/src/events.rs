//! CRUD operations for [`Event`] records.

use moments_shared::EventId;

use crate::backend::StorageBackend;
use crate::error::{Result, StoreError};
use crate::models::Event;
use crate::store::Store;

impl<B: StorageBackend> Store<B> {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Append a new event to the end of the collection and persist it.
    ///
    /// The caller supplies the pre-generated id; an id already present in
    /// the collection is rejected with [`StoreError::DuplicateId`] so the
    /// caller can regenerate and retry.
    pub fn create_event(&self, event: &Event) -> Result<()> {
        let mut events = self.load_events();

        if events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::DuplicateId(event.id.to_string()));
        }

        events.push(event.clone());
        self.persist_events(&events)?;

        tracing::debug!(event_id = %event.id, "event created");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// All events, insertion order preserved.  Degrades to empty on read
    /// failure.
    pub fn list_events(&self) -> Vec<Event> {
        self.load_events()
    }

    /// Fetch a single event by id.
    pub fn get_event(&self, id: &EventId) -> Option<Event> {
        self.load_events().into_iter().find(|e| &e.id == id)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the event with a matching id in place, preserving its
    /// position.  A silent no-op when the id is not present.
    pub fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.load_events();

        if let Some(slot) = events.iter_mut().find(|e| e.id == event.id) {
            *slot = event.clone();
            self.persist_events(&events)?;
            tracing::debug!(event_id = %event.id, "event updated");
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove the event and cascade to every media item referencing it.
    /// Removing an absent id is a no-op.
    pub fn delete_event(&self, id: &EventId) -> Result<()> {
        let mut events = self.load_events();
        events.retain(|e| &e.id != id);
        self.persist_events(&events)?;

        let mut media = self.load_media();
        let before = media.len();
        media.retain(|m| &m.event_id != id);
        let dropped = before - media.len();
        self.persist_media(&media)?;

        tracing::debug!(event_id = %id, cascaded = dropped, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::new())
    }

    fn event(id: &str, name: &str) -> Event {
        Event {
            id: EventId::new(id),
            name: name.into(),
            date: "2024-01-01".into(),
            host_name: "H".into(),
            welcome_message: None,
            cover_image: None,
            is_active: None,
            created_at: Some(1_700_000_000_000),
        }
    }

    #[test]
    fn create_then_get_round_trip() {
        let store = store();
        let e = event("e1", "Test");
        store.create_event(&e).unwrap();

        assert_eq!(store.get_event(&EventId::new("e1")), Some(e));
    }

    #[test]
    fn create_preserves_insertion_order() {
        let store = store();
        store.create_event(&event("a", "A")).unwrap();
        store.create_event(&event("b", "B")).unwrap();
        store.create_event(&event("c", "C")).unwrap();

        let ids: Vec<String> = store
            .list_events()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_id_is_rejected_and_collection_unchanged() {
        let store = store();
        store.create_event(&event("e1", "First")).unwrap();

        let result = store.create_event(&event("e1", "Second"));
        assert!(matches!(result, Err(StoreError::DuplicateId(_))));

        let events = store.list_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "First");
    }

    #[test]
    fn update_replaces_in_place() {
        let store = store();
        store.create_event(&event("a", "A")).unwrap();
        store.create_event(&event("b", "B")).unwrap();

        let mut updated = event("a", "A");
        updated.welcome_message = Some("hello".into());
        store.update_event(&updated).unwrap();

        let events = store.list_events();
        assert_eq!(events[0].welcome_message.as_deref(), Some("hello"));
        assert_eq!(events[0].id, EventId::new("a"));
        assert_eq!(events[1].id, EventId::new("b"));
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let store = store();
        store.create_event(&event("a", "A")).unwrap();

        let before = store.list_events();
        store.update_event(&event("ghost", "Ghost")).unwrap();
        assert_eq!(store.list_events(), before);
    }

    #[test]
    fn delete_cascades_to_media() {
        use moments_shared::{MediaId, MediaKind};

        let store = store();
        store.create_event(&event("e1", "One")).unwrap();
        store.create_event(&event("e2", "Two")).unwrap();

        for (media_id, event_id) in [("m1", "e1"), ("m2", "e1"), ("m3", "e1"), ("m4", "e2")] {
            store
                .create_media(&crate::models::MediaItem {
                    id: MediaId::new(media_id),
                    event_id: EventId::new(event_id),
                    url: "data:image/png;base64,AA==".into(),
                    kind: MediaKind::Image,
                    timestamp: 0,
                    caption: None,
                    ai_description: None,
                    uploader_name: None,
                })
                .unwrap();
        }

        store.delete_event(&EventId::new("e1")).unwrap();

        assert!(store.get_event(&EventId::new("e1")).is_none());
        let media = store.list_media();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].event_id, EventId::new("e2"));
    }
}
