//! Event lifecycle commands.

use moments_shared::constants::ID_RETRY_ATTEMPTS;
use moments_shared::EventId;
use moments_store::{Event, StorageBackend, StoreError};

use crate::error::AppError;
use crate::router::Route;
use crate::state::AppState;

/// Host-supplied fields for a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub host_name: String,
    pub date: String,
    pub welcome_message: Option<String>,
    pub cover_image: Option<String>,
}

impl<B: StorageBackend> AppState<B> {
    /// Create an event and return it together with the admin route to
    /// navigate to.
    ///
    /// Display fields must be non-empty.  The id is derived from the
    /// name; on the (unlikely) collision with an existing id a fresh
    /// suffix is generated, bounded by [`ID_RETRY_ATTEMPTS`].
    pub fn create_event(&self, new: NewEvent) -> Result<(Event, Route), AppError> {
        for (field, value) in [
            ("name", &new.name),
            ("hostName", &new.host_name),
            ("date", &new.date),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!("{field} must not be empty")));
            }
        }

        for _ in 0..ID_RETRY_ATTEMPTS {
            let event = Event {
                id: EventId::generate(&new.name),
                name: new.name.clone(),
                date: new.date.clone(),
                host_name: new.host_name.clone(),
                welcome_message: new.welcome_message.clone(),
                cover_image: new.cover_image.clone(),
                is_active: Some(true),
                created_at: Some(chrono::Utc::now().timestamp_millis()),
            };

            match self.store.create_event(&event) {
                Ok(()) => {
                    let route = Route::EventAdmin(event.id.clone());
                    tracing::info!(event_id = %event.id, "event created");
                    return Ok((event, route));
                }
                Err(StoreError::DuplicateId(id)) => {
                    tracing::debug!(%id, "event id collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::IdExhausted(ID_RETRY_ATTEMPTS))
    }

    /// Persist host edits to an existing event.  Unknown ids are a
    /// silent no-op, per the store contract.
    pub fn update_event(&self, event: &Event) -> Result<(), AppError> {
        self.store.update_event(event)?;
        Ok(())
    }

    /// Delete an event, cascading to its media.
    pub fn delete_event(&self, id: &EventId) -> Result<(), AppError> {
        self.store.delete_event(id)?;
        Ok(())
    }

    /// Regenerate the welcome message via the composer and persist it.
    pub async fn refresh_welcome(
        &self,
        id: &EventId,
        event_type: &str,
    ) -> Result<Event, AppError> {
        let mut event = self
            .store
            .get_event(id)
            .ok_or_else(|| AppError::EventNotFound(id.clone()))?;

        let message = self
            .composer
            .welcome_message(&event.name, &event.host_name, event_type)
            .await;

        event.welcome_message = Some(message);
        self.store.update_event(&event)?;
        Ok(event)
    }

    /// Discard all user data and restore the demo dataset.  Refuses
    /// without explicit confirmation.
    pub fn reset_demo(&self, confirmed: bool) -> Result<(), AppError> {
        if !confirmed {
            return Err(AppError::NotConfirmed);
        }
        self.store.reset_all()?;
        Ok(())
    }
}
