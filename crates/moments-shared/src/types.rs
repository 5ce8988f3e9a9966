use serde::{Deserialize, Serialize};

use crate::ids;

/// Identifier of an event.  Human-legible: a slug derived from the event
/// name plus a short random suffix (`sarah-tom-s-wedding-k3f9a2`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a fresh id from an event name.  Uniqueness is not guaranteed
    /// by the suffix alone; callers verify against the store and retry.
    pub fn generate(name: &str) -> Self {
        Self(format!(
            "{}-{}",
            ids::slugify(name),
            ids::random_suffix(crate::constants::EVENT_SUFFIX_LEN)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a media item: creation timestamp plus a random suffix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MediaId(pub String);

impl MediaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a fresh id from a millisecond timestamp.
    pub fn generate(timestamp_ms: i64) -> Self {
        Self(format!(
            "media-{}-{}",
            timestamp_ms,
            ids::random_suffix(crate::constants::MEDIA_SUFFIX_LEN)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two media categories the gallery distinguishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by declared media type: an `image/` prefix is an image,
    /// anything else is treated as video.
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.starts_with("image/") {
            Self::Image
        } else {
            Self::Video
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_media_type() {
        assert_eq!(MediaKind::from_media_type("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_media_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_media_type("video/mp4"), MediaKind::Video);
        assert_eq!(
            MediaKind::from_media_type("application/octet-stream"),
            MediaKind::Video
        );
    }

    #[test]
    fn event_id_shape() {
        let id = EventId::generate("Sarah & Tom's Wedding");
        assert!(id.as_str().starts_with("sarah-tom-s-wedding-"));
    }

    #[test]
    fn media_id_shape() {
        let id = MediaId::generate(1_700_000_000_000);
        assert!(id.as_str().starts_with("media-1700000000000-"));
    }
}
