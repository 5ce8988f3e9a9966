//! View routing: navigation token → screen.
//!
//! Tokens follow fixed prefix rules; anything unrecognized lands on the
//! landing page.  Resolving a data-bearing screen always refetches from
//! the store first — the view layer never renders from a stale copy.

use serde::Serialize;

use moments_shared::EventId;
use moments_store::{Event, MediaItem, StorageBackend, Store};

/// Parsed navigation target.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    EventAdmin(EventId),
    PublicUpload(EventId),
}

impl Route {
    /// Apply the prefix rules to an opaque path token.
    pub fn parse(token: &str) -> Self {
        if let Some(id) = token.strip_prefix("/event/") {
            Self::PublicUpload(EventId::new(id))
        } else if token == "/dashboard" {
            Self::Dashboard
        } else if let Some(id) = token.strip_prefix("/admin/") {
            Self::EventAdmin(EventId::new(id))
        } else {
            Self::Landing
        }
    }

    /// The token that navigates to this route.
    pub fn token(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::EventAdmin(id) => format!("/admin/{id}"),
            Self::PublicUpload(id) => format!("/event/{id}"),
        }
    }
}

/// A resolved screen, carrying the freshly fetched data it renders from.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    Landing,
    Dashboard {
        events: Vec<Event>,
        media: Vec<MediaItem>,
    },
    EventAdmin {
        event: Event,
        media: Vec<MediaItem>,
    },
    PublicUpload {
        event: Event,
    },
    /// Terminal state when a navigated-to event id does not resolve.
    NotFound {
        event_id: EventId,
    },
}

/// Resolve a route against the store, refetching the collections a
/// data-bearing screen needs.
pub fn resolve<B: StorageBackend>(store: &Store<B>, route: &Route) -> View {
    match route {
        Route::Landing => View::Landing,
        Route::Dashboard => View::Dashboard {
            events: store.list_events(),
            media: store.list_media(),
        },
        Route::EventAdmin(id) => match store.get_event(id) {
            Some(event) => {
                let media = store.list_media_by_event(id);
                View::EventAdmin { event, media }
            }
            None => View::NotFound {
                event_id: id.clone(),
            },
        },
        Route::PublicUpload(id) => match store.get_event(id) {
            Some(event) => View::PublicUpload { event },
            None => View::NotFound {
                event_id: id.clone(),
            },
        },
    }
}
