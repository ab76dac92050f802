/// Recursive depth-first walker that builds the owned scan tree.
///
/// Per directory: validate (with alternate-path fallback), apply the ignore
/// policy, list entries (retrying once through the extended-length form),
/// then visit every entry. Entries are independent: a failed stat drops only
/// that entry, never its siblings or the parent.
///
/// # Determinism
///
/// Entry names are sorted before they are visited and sibling results are
/// collected in that order, so the parallel visit produces the same tree on
/// every run. The stable size sort then only reorders by size.
use crate::config::ScanConfig;
use crate::model::{aggregate, FileNode, ScanNode, SkippedEntry};
use crate::platform::{EntryStat, FileSystem};
use crate::scanner::progress::ProgressSink;
use crate::scanner::validate::PathValidator;
use rayon::prelude::*;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Children and skipped entries produced for one directory.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub children: Vec<ScanNode>,
    pub skipped: Vec<SkippedEntry>,
}

/// What a single directory entry contributed.
enum EntryOutcome {
    /// A file leaf.
    File(ScanNode),
    /// A subdirectory: its node (absent when it had no content) and the
    /// skipped entries from anywhere beneath it.
    Subtree {
        node: Option<ScanNode>,
        skipped: Vec<SkippedEntry>,
    },
    /// Rejected by the character-class check.
    Skipped(SkippedEntry),
    /// Dropped silently: ignore-policy match or access failure.
    Dropped,
}

pub struct Walker<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a ScanConfig,
    validator: PathValidator<'a, F>,
    progress: Option<&'a ProgressSink>,
    parallel: bool,
}

impl<'a, F: FileSystem> Walker<'a, F> {
    pub fn new(fs: &'a F, config: &'a ScanConfig) -> Self {
        Self {
            fs,
            config,
            validator: PathValidator::new(fs),
            progress: None,
            parallel: true,
        }
    }

    /// Visit siblings one at a time on the calling thread instead of
    /// fanning out on the current rayon pool.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Report counters and per-entry errors to `sink`, and honour its
    /// cancellation flag.
    pub fn with_progress(mut self, sink: &'a ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Walk the subtree rooted at `path`.
    ///
    /// Never fails: an invalid, ignored or unreadable directory yields an
    /// empty output.
    pub fn walk(&self, path: &Path) -> WalkOutput {
        let Some(dir) = self.validator.resolve(path) else {
            debug!("Invalid directory: {}", path.display());
            return WalkOutput::default();
        };

        if self.config.ignore.should_ignore(&dir) {
            debug!("Ignored directory: {}", dir.display());
            return WalkOutput::default();
        }

        if self.is_cancelled() {
            return WalkOutput::default();
        }

        let Some(mut names) = self.list_entries(&dir) else {
            return WalkOutput::default();
        };
        names.sort();

        if let Some(sink) = self.progress {
            sink.record_dir();
        }

        let outcomes: Vec<EntryOutcome> = if self.parallel {
            names
                .par_iter()
                .map(|name| self.visit_entry(&dir, name))
                .collect()
        } else {
            names.iter().map(|name| self.visit_entry(&dir, name)).collect()
        };

        let mut output = WalkOutput::default();
        for outcome in outcomes {
            match outcome {
                EntryOutcome::File(node) => output.children.push(node),
                EntryOutcome::Subtree { node, mut skipped } => {
                    output.children.extend(node);
                    output.skipped.append(&mut skipped);
                }
                EntryOutcome::Skipped(entry) => output.skipped.push(entry),
                EntryOutcome::Dropped => {}
            }
        }

        aggregate::sort_by_size_desc(&mut output.children);
        output
    }

    fn visit_entry(&self, dir: &Path, name: &OsString) -> EntryOutcome {
        let path = dir.join(name);

        let display = match name.to_str() {
            Some(s) if !self.config.charset.has_unsupported_characters(s) => s,
            _ => {
                let lossy = name.to_string_lossy();
                info!("Skipping entry with unsupported characters: {lossy}");
                return EntryOutcome::Skipped(SkippedEntry::unsupported_characters(&lossy, &path));
            }
        };

        if self.config.ignore.should_ignore(&path) {
            trace!("Ignored entry: {}", path.display());
            return EntryOutcome::Dropped;
        }

        let stat = match self.stat_entry(&path) {
            Ok(stat) => stat,
            Err(err) => {
                warn!("Access error for {}: {err}", path.display());
                if let Some(sink) = self.progress {
                    sink.record_error(&path, err.to_string());
                }
                return EntryOutcome::Dropped;
            }
        };

        if stat.is_dir {
            let sub = self.walk(&path);
            let node = aggregate::directory(display, &path, sub.children).map(ScanNode::Directory);
            EntryOutcome::Subtree {
                node,
                skipped: sub.skipped,
            }
        } else {
            if let Some(sink) = self.progress {
                sink.record_file(&path);
            }
            EntryOutcome::File(ScanNode::File(FileNode::new(display, &path, stat.size)))
        }
    }

    /// List `dir`, retrying once through the extended-length form.
    fn list_entries(&self, dir: &Path) -> Option<Vec<OsString>> {
        let err = match self.fs.read_dir_names(dir) {
            Ok(names) => return Some(names),
            Err(err) => err,
        };

        if let Some(extended) = self.fs.extended_path(dir) {
            debug!(
                "Listing {} failed ({err}); retrying as {}",
                dir.display(),
                extended.display()
            );
            match self.fs.read_dir_names(&extended) {
                Ok(names) => return Some(names),
                Err(retry_err) => {
                    warn!("Cannot list {}: {retry_err}", extended.display());
                    return None;
                }
            }
        }

        warn!("Cannot list {}: {err}", dir.display());
        None
    }

    /// Stat an entry, falling back to its alternate short form.
    fn stat_entry(&self, path: &Path) -> io::Result<EntryStat> {
        match self.fs.stat(path) {
            Ok(stat) => Ok(stat),
            Err(err) => match self.fs.resolve_alternate(path) {
                Some(alternate) if alternate.as_path() != path => self.fs.stat(&alternate),
                _ => Err(err),
            },
        }
    }

    fn is_cancelled(&self) -> bool {
        self.progress.is_some_and(ProgressSink::is_cancelled)
    }
}

/// Resolve the display name of a scan root (used in log lines only).
pub(crate) fn root_display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().trim_end_matches(['\\', '/']).to_string(),
    }
}
