use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error from the backing medium.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization of a collection failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An insert collided with an id already present in the collection.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
