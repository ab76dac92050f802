/// Scan progress reporting: lightweight messages sent from a background
/// scan thread to whoever holds the `ScanHandle`.
use crate::model::ScanResult;
use crossbeam_channel::Sender;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Progress updates sent from the scan thread.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        current_path: String,
    },
    /// A non-fatal per-entry failure (e.g. permission denied on one file).
    EntryError { path: String, message: String },
    /// Scanning completed; carries the finished result.
    Complete {
        result: ScanResult,
        duration: Duration,
    },
    /// Scan was cancelled; partial results were discarded.
    Cancelled,
}

/// Shared between the walker's worker threads: counters, the outgoing
/// channel and the cancellation flag.
pub struct ProgressSink {
    tx: Sender<ScanProgress>,
    cancel_flag: Arc<AtomicBool>,
    interval: u64,
    files_found: AtomicU64,
    dirs_found: AtomicU64,
}

impl ProgressSink {
    pub fn new(tx: Sender<ScanProgress>, cancel_flag: Arc<AtomicBool>, interval: u64) -> Self {
        Self {
            tx,
            cancel_flag,
            interval: interval.max(1),
            files_found: AtomicU64::new(0),
            dirs_found: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    pub fn record_dir(&self) {
        self.dirs_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one file; every `interval` files an `Update` is offered.
    pub fn record_file(&self, path: &Path) {
        let files = self.files_found.fetch_add(1, Ordering::Relaxed) + 1;
        if files % self.interval == 0 {
            self.offer(ScanProgress::Update {
                files_found: files,
                dirs_found: self.dirs_found.load(Ordering::Relaxed),
                current_path: path.to_string_lossy().into_owned(),
            });
        }
    }

    pub fn record_error(&self, path: &Path, message: String) {
        self.offer(ScanProgress::EntryError {
            path: path.to_string_lossy().into_owned(),
            message,
        });
    }

    /// Informational messages never block the walker: when the channel is
    /// full the message is dropped.
    fn offer(&self, message: ScanProgress) {
        let _ = self.tx.try_send(message);
    }
}
