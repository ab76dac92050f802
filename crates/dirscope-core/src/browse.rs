/// One-level directory listing for the folder picker.
///
/// Lists only the immediate subdirectories of a path, filtered by the same
/// ignore policy as the scanner and sorted by name.
use crate::error::ScanError;
use crate::platform::{default_browse_root, FileSystem, NativeFs};
use crate::policy::IgnorePolicy;
use crate::scanner::validate::normalize_root;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseEntry {
    pub name: String,
    pub path: String,
}

/// The directory that was listed and its visible subdirectories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseListing {
    pub current: String,
    pub directories: Vec<BrowseEntry>,
}

/// List the subdirectories of `path` (the host root when `None` or blank).
pub fn browse(path: Option<&str>, ignore: &IgnorePolicy) -> Result<BrowseListing, ScanError> {
    browse_fs(&NativeFs, path, ignore)
}

pub fn browse_fs<F: FileSystem>(
    fs: &F,
    path: Option<&str>,
    ignore: &IgnorePolicy,
) -> Result<BrowseListing, ScanError> {
    let dir: PathBuf = match path.map(str::trim) {
        Some(raw) if !raw.is_empty() => normalize_root(raw),
        _ => default_browse_root(),
    };

    let names = fs
        .read_dir_names(&dir)
        .map_err(|source| ScanError::Browse {
            path: dir.clone(),
            source,
        })?;

    let mut directories: Vec<BrowseEntry> = names
        .into_iter()
        .filter_map(|name| {
            let full = dir.join(&name);
            match fs.probe_directory(&full) {
                Ok(true) if !ignore.should_ignore(&full) => Some(BrowseEntry {
                    name: name.to_string_lossy().into_owned(),
                    path: full.to_string_lossy().into_owned(),
                }),
                Ok(_) => None,
                Err(err) => {
                    trace!("Skipping {} while browsing: {err}", full.display());
                    None
                }
            }
        })
        .collect();

    directories.sort_by(|a, b| compare_names(&a.name, &b.name));

    Ok(BrowseListing {
        current: dir.to_string_lossy().into_owned(),
        directories,
    })
}

/// Case-insensitive order, falling back to the raw names for a total order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_only_visible_directories_sorted() {
        let tmp = tempfile::TempDir::new().unwrap();
        for dir in ["beta", "Alpha", "gamma", "$Recycle.Bin", "PerfLogs"] {
            fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        fs::write(tmp.path().join("file.txt"), b"x").unwrap();

        let listing = browse(tmp.path().to_str(), &IgnorePolicy::default()).unwrap();
        let names: Vec<&str> = listing.directories.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, ["Alpha", "beta", "gamma"]);
        assert_eq!(listing.current, tmp.path().to_string_lossy());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = browse(Some("/no/such/place/here"), &IgnorePolicy::default()).unwrap_err();
        assert!(matches!(err, ScanError::Browse { .. }));
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("a", "B"), Ordering::Less);
        assert_eq!(compare_names("B", "b"), Ordering::Less);
    }
}
