//! # moments-shared
//!
//! Domain identifiers, media kinds and constants shared by every Moments
//! crate.  This crate is dependency-light on purpose: the store, the upload
//! pipeline and the application layer all speak these types.

pub mod constants;
pub mod ids;
pub mod types;

pub use types::{EventId, MediaId, MediaKind};
