//! Scanner module. Turns a root path into a [`ScanResult`].
//!
//! Two entry points:
//! - [`scan`] / [`scan_with`] / [`scan_fs`]: synchronous, caller's thread.
//! - [`start_scan`]: background thread with progress messages and
//!   cancellation, for frontends that must stay responsive.
//!
//! Each call owns its walker, result buffers and `rayon` pool, so any number
//! of scans can run concurrently without sharing mutable state.

pub mod progress;
pub mod validate;
pub mod walker;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::{size, ScanResult};
use crate::platform::{FileSystem, NativeFs};
use progress::{ProgressSink, ScanProgress};
use walker::{root_display_name, WalkOutput, Walker};

use crossbeam_channel::Receiver;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Updates and per-entry errors are dropped when the queue is full; only the
/// terminal `Complete`/`Cancelled` message waits for room.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Stack reserved for each walk thread.
///
/// The walk recurses once per directory level, so this bounds the nesting
/// depth a scan can handle. 64 MiB covers the deepest trees a native path
/// length allows.
pub const WALK_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Scan `root` on the host file system with the default configuration.
///
/// Fails only when `root` is the empty string. Missing, inaccessible or
/// ignored roots (including whitespace-only input) produce an empty result.
pub fn scan(root: &str) -> Result<ScanResult, ScanError> {
    scan_with(root, &ScanConfig::default())
}

/// Scan `root` on the host file system.
pub fn scan_with(root: &str, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    scan_fs(&NativeFs, root, config)
}

/// Scan `root` through an arbitrary [`FileSystem`].
pub fn scan_fs<F: FileSystem>(
    fs: &F,
    root: &str,
    config: &ScanConfig,
) -> Result<ScanResult, ScanError> {
    Ok(match checked_root(root)? {
        Some(root_path) => run_scan(fs, &root_path, config, None),
        None => ScanResult::default(),
    })
}

/// Reject empty input and normalise the rest into a native absolute path.
///
/// A whitespace-only root names no directory and yields `None` without
/// being resolved.
fn checked_root(root: &str) -> Result<Option<PathBuf>, ScanError> {
    if root.is_empty() {
        return Err(ScanError::invalid_input("root path must be a non-empty string"));
    }
    if root.trim().is_empty() {
        debug!("Blank root {root:?} names no directory");
        return Ok(None);
    }
    Ok(Some(validate::normalize_root(root)))
}

/// Walk `root` on a dedicated pool and package the top-level output.
fn run_scan<F: FileSystem>(
    fs: &F,
    root: &Path,
    config: &ScanConfig,
    sink: Option<&ProgressSink>,
) -> ScanResult {
    let start = Instant::now();
    info!(
        "Starting scan of {} ({})",
        root.display(),
        root_display_name(root)
    );

    let mut walker = Walker::new(fs, config);
    if let Some(sink) = sink {
        walker = walker.with_progress(sink);
    }

    let threads = config.worker_threads();
    let output = match rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("dirscope-walk-{i}"))
        .stack_size(WALK_STACK_SIZE)
        .build()
    {
        Ok(pool) => pool.install(|| walker.walk(root)),
        Err(err) => {
            warn!("Could not build a {threads}-thread pool ({err}); walking sequentially");
            walk_sequentially(walker.sequential(), root)
        }
    };

    let WalkOutput { children, skipped } = output;
    let result = ScanResult {
        files: children,
        skipped,
    };
    info!(
        "Scan of {} complete in {:?}: {}",
        root.display(),
        start.elapsed(),
        size::describe_totals(result.file_count(), result.total_size(), result.skipped.len())
    );
    result
}

/// Walk on a single scoped thread with the same stack budget as the pool.
fn walk_sequentially<F: FileSystem>(walker: Walker<'_, F>, root: &Path) -> WalkOutput {
    thread::scope(|scope| {
        let spawned = thread::Builder::new()
            .name("dirscope-walk".into())
            .stack_size(WALK_STACK_SIZE)
            .spawn_scoped(scope, || walker.walk(root));
        match spawned {
            Ok(handle) => handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
            Err(err) => {
                warn!("Could not spawn a walk thread ({err}); walking on the caller's stack");
                walker.walk(root)
            }
        }
    })
}

/// Handle to a running or completed background scan.
///
/// Dropping the handle cancels the scan; the thread then discards its
/// partial result.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start a scan of `root` on a background thread.
///
/// Input validation happens up front so an empty root fails synchronously;
/// everything after that is reported through the handle's channel, ending in
/// exactly one `Complete` or `Cancelled`.
pub fn start_scan(root: &str, config: ScanConfig) -> Result<ScanHandle, ScanError> {
    let root_path = checked_root(root)?;
    let root = root.to_string();

    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("dirscope-scanner".into())
        .spawn(move || {
            let start = Instant::now();
            let sink = ProgressSink::new(
                progress_tx.clone(),
                cancel_clone.clone(),
                config.progress_interval,
            );
            let result = match &root_path {
                Some(path) => run_scan(&NativeFs, path, &config, Some(&sink)),
                None => ScanResult::default(),
            };

            if cancel_clone.load(Ordering::Relaxed) {
                info!("Scan of {root:?} cancelled");
                let _ = progress_tx.send(ScanProgress::Cancelled);
            } else {
                let _ = progress_tx.send(ScanProgress::Complete {
                    result,
                    duration: start.elapsed(),
                });
            }
        })
        .expect("failed to spawn scanner thread");

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    })
}
