//! Application configuration loaded from environment variables.
//!
//! All settings have defaults so the application starts with zero
//! configuration: no remote uploader (everything embeds locally) and no
//! generative API key (assistants answer with their templates).

use std::path::PathBuf;
use std::time::Duration;

use moments_shared::constants::{DEFAULT_UPLOAD_FOLDER, DEFAULT_UPLOAD_TIMEOUT_SECS};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage directory override.
    /// Env: `MOMENTS_DATA_DIR`
    /// Default: platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Unsigned-upload endpoint of the media host.
    /// Env: `MOMENTS_UPLOAD_URL`
    /// Default: empty (uploader unconfigured, local embedding only).
    pub upload_url: String,

    /// Unsigned upload preset name.
    /// Env: `MOMENTS_UPLOAD_PRESET`
    /// Default: empty.
    pub upload_preset: String,

    /// Folder uploads are grouped under on the media host.
    /// Env: `MOMENTS_UPLOAD_FOLDER`
    /// Default: `moments-events`.
    pub upload_folder: String,

    /// Remote upload timeout; expiry falls back to local embedding.
    /// Env: `MOMENTS_UPLOAD_TIMEOUT_SECS`
    /// Default: 30.
    pub upload_timeout: Duration,

    /// Base URL of the generative API.
    /// Env: `MOMENTS_GENAI_URL`
    pub genai_url: String,

    /// Generative API key.
    /// Env: `MOMENTS_GENAI_KEY`
    /// Default: empty (assistants answer with fallbacks).
    pub genai_key: String,

    /// Generative model name.
    /// Env: `MOMENTS_GENAI_MODEL`
    pub genai_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            upload_url: String::new(),
            upload_preset: String::new(),
            upload_folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            upload_timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
            genai_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            genai_key: String::new(),
            genai_model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults.  Invalid values warn and keep the default rather than
    /// aborting.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("MOMENTS_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(url) = std::env::var("MOMENTS_UPLOAD_URL") {
            config.upload_url = url;
        }

        if let Ok(preset) = std::env::var("MOMENTS_UPLOAD_PRESET") {
            config.upload_preset = preset;
        }

        if let Ok(folder) = std::env::var("MOMENTS_UPLOAD_FOLDER") {
            if !folder.is_empty() {
                config.upload_folder = folder;
            }
        }

        if let Ok(secs) = std::env::var("MOMENTS_UPLOAD_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(n) if n > 0 => config.upload_timeout = Duration::from_secs(n),
                _ => {
                    tracing::warn!(
                        value = %secs,
                        "Invalid MOMENTS_UPLOAD_TIMEOUT_SECS, using default"
                    );
                }
            }
        }

        if let Ok(url) = std::env::var("MOMENTS_GENAI_URL") {
            if !url.is_empty() {
                config.genai_url = url;
            }
        }

        if let Ok(key) = std::env::var("MOMENTS_GENAI_KEY") {
            config.genai_key = key;
        }

        if let Ok(model) = std::env::var("MOMENTS_GENAI_MODEL") {
            if !model.is_empty() {
                config.genai_model = model;
            }
        }

        config
    }
}
