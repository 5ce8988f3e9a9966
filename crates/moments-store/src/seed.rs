//! Fixed first-run dataset.
//!
//! [`Store::initialize`](crate::Store::initialize) seeds an empty backend
//! with these demo collections; media timestamps are expressed relative to
//! the moment of seeding so the gallery opens with plausible recency.

use moments_shared::{EventId, MediaId, MediaKind};

use crate::models::{Event, MediaItem};

pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new("demo-wedding"),
            name: "Sarah & Tom's Wedding".into(),
            date: "2024-06-15".into(),
            host_name: "Sarah".into(),
            welcome_message: Some(
                "Welcome to our special day! Please snap and share every magical moment with us. 💕"
                    .into(),
            ),
            cover_image: Some(
                "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q=80".into(),
            ),
            is_active: None,
            created_at: None,
        },
        Event {
            id: EventId::new("demo-birthday"),
            name: "Emma's 30th Birthday Bash".into(),
            date: "2024-07-20".into(),
            host_name: "Emma".into(),
            welcome_message: Some(
                "It's my dirty thirty! Help me capture all the fun moments! 🎂🎉".into(),
            ),
            cover_image: Some(
                "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=800&q=80".into(),
            ),
            is_active: None,
            created_at: None,
        },
    ]
}

pub fn default_media(now_ms: i64) -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: MediaId::new("demo-media-1"),
            event_id: EventId::new("demo-wedding"),
            url: "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&q=80".into(),
            kind: MediaKind::Image,
            timestamp: now_ms - 3_600_000,
            caption: Some("The first dance".into()),
            ai_description: Some("Pure romance! ✨".into()),
            uploader_name: None,
        },
        MediaItem {
            id: MediaId::new("demo-media-2"),
            event_id: EventId::new("demo-wedding"),
            url: "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?w=800&q=80".into(),
            kind: MediaKind::Image,
            timestamp: now_ms - 7_200_000,
            caption: Some("Cutting the cake".into()),
            ai_description: Some("Sweet celebration!".into()),
            uploader_name: None,
        },
        MediaItem {
            id: MediaId::new("demo-media-3"),
            event_id: EventId::new("demo-wedding"),
            url: "https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=800&q=80".into(),
            kind: MediaKind::Image,
            timestamp: now_ms - 10_800_000,
            caption: None,
            ai_description: Some("Joyful moments!".into()),
            uploader_name: None,
        },
        MediaItem {
            id: MediaId::new("demo-media-4"),
            event_id: EventId::new("demo-birthday"),
            url: "https://images.unsplash.com/photo-1464349153735-7db50ed83c84?w=800&q=80".into(),
            kind: MediaKind::Image,
            timestamp: now_ms - 1_800_000,
            caption: None,
            ai_description: Some("Party vibes! 🎉".into()),
            uploader_name: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_media_references_seed_events() {
        let event_ids: Vec<EventId> = default_events().into_iter().map(|e| e.id).collect();
        for item in default_media(0) {
            assert!(event_ids.contains(&item.event_id));
        }
    }

    #[test]
    fn seed_timestamps_precede_now() {
        let now = 1_700_000_000_000;
        assert!(default_media(now).iter().all(|m| m.timestamp < now));
    }
}
