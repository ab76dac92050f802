/// File-system primitives consumed by the scanner.
///
/// The walker never calls `std::fs` directly; it goes through
/// [`FileSystem`] so path-quirk fallbacks can be supplied per platform and
/// exercised against in-memory trees in tests.
use super::alt_path;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Result of a non-following stat on a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub is_dir: bool,
    /// Logical size in bytes (0 for directories).
    pub size: u64,
}

pub trait FileSystem: Sync {
    /// Names of the immediate entries of `path`, in no particular order.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Stat one entry without following symlinks.
    fn stat(&self, path: &Path) -> io::Result<EntryStat>;

    /// `Ok(true)` if `path` is an accessible directory. Follows symlinks.
    fn probe_directory(&self, path: &Path) -> io::Result<bool>;

    /// Alternate (legacy short-name) form of `path`, if the platform has one.
    fn resolve_alternate(&self, _path: &Path) -> Option<PathBuf> {
        None
    }

    /// Extended-length form of `path` that bypasses path-length ceilings.
    fn extended_path(&self, _path: &Path) -> Option<PathBuf> {
        None
    }
}

/// The host file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl FileSystem for NativeFs {
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                // A single unreadable slot does not invalidate the listing.
                Err(err) => trace!("Skipping unreadable entry in {}: {err}", path.display()),
            }
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        let meta = std::fs::symlink_metadata(path)?;
        let is_dir = meta.is_dir();
        Ok(EntryStat {
            is_dir,
            size: if is_dir { 0 } else { meta.len() },
        })
    }

    fn probe_directory(&self, path: &Path) -> io::Result<bool> {
        std::fs::metadata(path).map(|meta| meta.is_dir())
    }

    fn resolve_alternate(&self, path: &Path) -> Option<PathBuf> {
        alt_path::short_path(path)
    }

    fn extended_path(&self, path: &Path) -> Option<PathBuf> {
        alt_path::extended_length_path(path)
    }
}
