//! Progress reporting for uploads.
//!
//! Per-file byte progress is a pair of atomics behind an [`Arc`] so a
//! caller can poll fractional progress while the transfer is in flight;
//! batch progress is reported at file boundaries via callback.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared byte counters for one in-flight transfer.
#[derive(Debug, Default)]
pub struct TransferProgress {
    pub bytes_done: AtomicU64,
    pub bytes_total: AtomicU64,
}

impl TransferProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction transferred in `[0.0, 1.0]`; zero until the total is
    /// known.
    pub fn fraction(&self) -> f32 {
        let total = self.bytes_total.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let done = self.bytes_done.load(Ordering::Relaxed);
        (done as f32 / total as f32).min(1.0)
    }
}

/// Position within an upload batch: `current` files finished out of
/// `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub current: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn fraction_is_zero_before_total_known() {
        let progress = TransferProgress::new();
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn fraction_tracks_bytes() {
        let progress = TransferProgress::new();
        progress.bytes_total.store(200, Ordering::Relaxed);
        progress.bytes_done.store(50, Ordering::Relaxed);
        assert!((progress.fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn fraction_is_clamped() {
        let progress = TransferProgress::new();
        progress.bytes_total.store(10, Ordering::Relaxed);
        progress.bytes_done.store(25, Ordering::Relaxed);
        assert_eq!(progress.fraction(), 1.0);
    }
}
