/// Path validation with alternate-form fallback, plus normalisation of
/// caller-supplied root paths.
use crate::platform::FileSystem;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;

/// Confirms that a path is an accessible directory.
///
/// A negative answer is never an error: missing, unreadable and non-directory
/// paths all come back as "invalid" and the caller skips them.
pub struct PathValidator<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> PathValidator<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// `true` iff `path` (or its alternate form) is an accessible directory.
    pub fn validate(&self, path: &Path) -> bool {
        self.resolve(path).is_some()
    }

    /// Return the form of `path` that validated: the native path first, then
    /// the platform's alternate short form.
    pub fn resolve(&self, path: &Path) -> Option<PathBuf> {
        if self.is_directory(path) {
            return Some(path.to_path_buf());
        }

        let alternate = self.fs.resolve_alternate(path)?;
        if alternate.as_path() == path {
            return None;
        }
        if self.is_directory(&alternate) {
            debug!(
                "Using alternate path {} for {}",
                alternate.display(),
                path.display()
            );
            Some(alternate)
        } else {
            None
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        match self.fs.probe_directory(path) {
            Ok(is_dir) => {
                if !is_dir {
                    debug!("Not a directory: {}", path.display());
                }
                is_dir
            }
            Err(err) => {
                debug!("Path validation failed for {}: {err}", path.display());
                false
            }
        }
    }
}

/// Convert a caller-supplied root into a native, absolute path.
///
/// Both `/` and `\` become the host separator. Trailing separators are
/// dropped unless the path is a bare root (`/`, `C:\`).
pub fn normalize_root(raw: &str) -> PathBuf {
    let mut native: String = raw
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect();

    while native.len() > 1 && native.ends_with(MAIN_SEPARATOR) && !is_drive_root(&native) {
        native.pop();
    }

    let path = PathBuf::from(native);
    std::path::absolute(&path).unwrap_or(path)
}

/// `C:\` style root (three bytes: letter, colon, separator).
fn is_drive_root(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 3 && b[0].is_ascii_alphabetic() && b[1] == b':'
}
