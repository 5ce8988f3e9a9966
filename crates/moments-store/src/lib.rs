//! # moments-store
//!
//! Local persistence for the Moments application.
//!
//! Two collections — events and media — are kept as ordered JSON arrays
//! under two fixed keys of a pluggable key-value [`backend`].  The
//! [`Store`] mediates every access: reads degrade to an empty collection
//! when the backing medium is missing or corrupt, writes surface their
//! failures as [`StoreError`] so callers can react.

pub mod backend;
pub mod events;
pub mod media;
pub mod models;
pub mod seed;
pub mod store;

mod error;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use models::*;
pub use store::{Store, StoreStats};
