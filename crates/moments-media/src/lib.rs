//! # moments-media
//!
//! The upload pipeline: turns user-selected files into persisted
//! [`MediaItem`](moments_store::MediaItem) records.
//!
//! Each file is first offered to the remote uploader (when one is
//! configured), bounded by a timeout; on failure or expiry the file is
//! embedded locally as a `data:` URI.  The remote path is best-effort —
//! no uploader failure ever escapes the pipeline boundary, and one file's
//! failure never aborts the batch.

pub mod embed;
pub mod file;
pub mod pipeline;
pub mod progress;
pub mod uploader;

mod error;

pub use error::MediaError;
pub use file::UploadFile;
pub use pipeline::{BatchOutcome, UploadPipeline};
pub use progress::{BatchProgress, TransferProgress};
pub use uploader::{HttpUploader, RemoteUpload, RemoteUploader};
