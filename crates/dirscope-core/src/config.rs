/// Scan configuration: exclusion policy, parallelism and progress cadence.
///
/// Loaded from an optional JSON file; any field left out keeps its default.
use crate::error::ScanError;
use crate::policy::{CharsetPolicy, IgnorePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of files between two `ScanProgress::Update` messages.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub ignore: IgnorePolicy,
    pub charset: CharsetPolicy,
    /// Worker threads for the per-scan pool. `None` uses one per CPU.
    pub threads: Option<usize>,
    pub progress_interval: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: IgnorePolicy::default(),
            charset: CharsetPolicy::default(),
            threads: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ScanConfig {
    /// Read a (possibly partial) JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ScanError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ScanError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolved worker count, never zero.
    pub fn worker_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}
