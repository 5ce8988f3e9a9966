//! # moments-assist
//!
//! The generative collaborators: a welcome-message composer and an image
//! analyzer, both thin calls to an external generative API.
//!
//! Failure never crosses this crate's boundary — every public operation
//! returns a deterministic fallback string instead of an error, so the
//! rest of the system can treat these features as always available.

pub mod client;
pub mod vision;
pub mod welcome;

pub use client::GenAiClient;
pub use vision::{fallback_description, ImageAnalyzer};
pub use welcome::{fallback_welcome, WelcomeComposer};
