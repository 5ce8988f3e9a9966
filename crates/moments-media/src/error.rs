use thiserror::Error;

/// Errors produced while processing an upload.
#[derive(Error, Debug)]
pub enum MediaError {
    /// Reading the source file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP layer failed (connect, send, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The media host answered with a non-success status or an
    /// unexpected body.
    #[error("Upload rejected: {0}")]
    Upload(String),

    /// Persisting the resulting media record failed.
    #[error("Store error: {0}")]
    Store(#[from] moments_store::StoreError),
}

pub type Result<T> = std::result::Result<T, MediaError>;
