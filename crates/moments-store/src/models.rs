//! Domain model structs persisted in the local key-value backend.
//!
//! Field names serialize in camelCase so the stored JSON matches the
//! layout the original web client persisted; optional fields are omitted
//! when absent rather than written as `null`.

use serde::{Deserialize, Serialize};

use moments_shared::{EventId, MediaId, MediaKind};

/// One photo-collection campaign created by a host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable routing key, also the foreign key on [`MediaItem`].
    pub id: EventId,
    /// Display name of the event.
    pub name: String,
    /// Display date string; not validated beyond non-empty at creation.
    pub date: String,
    /// Display name of the host.
    pub host_name: String,
    /// Message shown to uploaders; editable after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    /// Decorative cover (URL or embedded data).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Cosmetic activity flag; no state machine is enforced around it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Millisecond creation timestamp, set once and never mutated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// One uploaded photo or video tied to an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: MediaId,
    /// Foreign key; expected to reference an existing event at creation
    /// time (a caller contract, not a stored constraint).
    pub event_id: EventId,
    /// Remote address or self-contained `data:` URI.
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Millisecond creation timestamp, immutable.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Filled in asynchronously once the image analyzer has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_camel_case() {
        let event = Event {
            id: EventId::new("demo-wedding"),
            name: "Wedding".into(),
            date: "2024-06-15".into(),
            host_name: "Sarah".into(),
            welcome_message: None,
            cover_image: None,
            is_active: None,
            created_at: Some(1_700_000_000_000),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["hostName"], "Sarah");
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        assert!(json.get("welcomeMessage").is_none());
    }

    #[test]
    fn media_item_round_trip() {
        let json = r#"{
            "id": "media-1700000000000-abc123def",
            "eventId": "demo-wedding",
            "url": "https://example.com/a.jpg",
            "type": "image",
            "timestamp": 1700000000000,
            "caption": "The first dance"
        }"#;

        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.event_id, EventId::new("demo-wedding"));
        assert_eq!(item.caption.as_deref(), Some("The first dance"));
        assert!(item.uploader_name.is_none());
    }
}
