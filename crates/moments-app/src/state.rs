//! Application state shared across all commands.
//!
//! Holds the store and the external collaborators behind their traits so
//! tests can substitute fakes for any of them.

use moments_assist::{GenAiClient, ImageAnalyzer, WelcomeComposer};
use moments_media::{HttpUploader, UploadPipeline};
use moments_store::{FileBackend, StorageBackend, Store};

use crate::config::Config;
use crate::error::AppError;

/// Central application state.
pub struct AppState<B: StorageBackend> {
    /// Canonical owner of both collections.
    pub store: Store<B>,

    /// Remote-first upload processing with local fallback.
    pub pipeline: UploadPipeline,

    /// Welcome-message collaborator (never fails past its boundary).
    pub composer: Box<dyn WelcomeComposer + Send + Sync>,

    /// Image-description collaborator (never fails past its boundary).
    pub analyzer: Box<dyn ImageAnalyzer + Send + Sync>,
}

impl<B: StorageBackend> AppState<B> {
    pub fn new(
        store: Store<B>,
        pipeline: UploadPipeline,
        composer: Box<dyn WelcomeComposer + Send + Sync>,
        analyzer: Box<dyn ImageAnalyzer + Send + Sync>,
    ) -> Self {
        Self {
            store,
            pipeline,
            composer,
            analyzer,
        }
    }
}

impl AppState<FileBackend> {
    /// Build the production wiring: file-backed store, HTTP uploader and
    /// generative client per configuration.  Runs `initialize()` so the
    /// first launch lands on the demo dataset.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let backend = match &config.data_dir {
            Some(dir) => FileBackend::open_at(dir)?,
            None => FileBackend::new()?,
        };

        let store = Store::new(backend);
        store.initialize()?;

        let uploader = HttpUploader::new(
            config.upload_url.clone(),
            config.upload_preset.clone(),
            config.upload_folder.clone(),
        );
        let pipeline = UploadPipeline::new(Box::new(uploader), config.upload_timeout);

        let composer = GenAiClient::new(
            config.genai_url.clone(),
            config.genai_key.clone(),
            config.genai_model.clone(),
        );
        let analyzer = GenAiClient::new(
            config.genai_url.clone(),
            config.genai_key.clone(),
            config.genai_model.clone(),
        );

        Ok(Self::new(
            store,
            pipeline,
            Box::new(composer),
            Box::new(analyzer),
        ))
    }
}
