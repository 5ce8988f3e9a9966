//! # moments-app
//!
//! The application layer: view routing, shared state and the command
//! seam the (out-of-scope) UI drives.  Rendering is someone else's job;
//! this crate decides *which* screen a navigation token maps to, refetches
//! fresh data for it, and funnels every mutation through the store.

pub mod commands;
pub mod config;
pub mod router;
pub mod state;

mod error;

pub use config::Config;
pub use error::AppError;
pub use router::{resolve, Route, View};
pub use state::AppState;
