use thiserror::Error;

use moments_shared::{EventId, MediaId};

/// Errors surfaced by the application command layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] moments_store::StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No event with id {0}")]
    EventNotFound(EventId),

    #[error("No media with id {0}")]
    MediaNotFound(MediaId),

    #[error("Could not generate a unique event id after {0} attempts")]
    IdExhausted(usize),

    #[error("Reset requires explicit confirmation")]
    NotConfirmed,
}
