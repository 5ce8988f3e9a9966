//! The command seam the UI drives: every user action funnels through
//! here, mutates via the store, and leaves the view layer to refetch.

pub mod events;
pub mod uploads;

pub use events::NewEvent;
pub use uploads::UploadSummary;
