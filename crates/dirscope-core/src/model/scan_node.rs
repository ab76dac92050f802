/// Owned scan tree: files, directories and the skipped-entry side list.
///
/// Each directory exclusively owns its children, so the tree needs no
/// indices or back-references and serialises directly into the document
/// consumed by the treemap frontend.
use super::file_type::FileCategory;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reason recorded for names rejected by the character-class check.
pub const UNSUPPORTED_CHARACTERS: &str = "unsupported characters";

/// A single file or directory in the result tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScanNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl ScanNode {
    pub fn name(&self) -> &str {
        match self {
            ScanNode::File(f) => &f.name,
            ScanNode::Directory(d) => &d.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ScanNode::File(f) => &f.path,
            ScanNode::Directory(d) => &d.path,
        }
    }

    /// Logical size in bytes. For directories this is the sum of all
    /// descendant file sizes.
    #[inline]
    pub fn size(&self) -> u64 {
        match self {
            ScanNode::File(f) => f.size,
            ScanNode::Directory(d) => d.size,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, ScanNode::Directory(_))
    }

    /// Direct children (always empty for files).
    pub fn children(&self) -> &[ScanNode] {
        match self {
            ScanNode::File(_) => &[],
            ScanNode::Directory(d) => &d.children,
        }
    }

    /// Number of file leaves in this subtree.
    pub fn file_count(&self) -> u64 {
        match self {
            ScanNode::File(_) => 1,
            ScanNode::Directory(d) => d.children.iter().map(ScanNode::file_count).sum(),
        }
    }
}

/// A leaf file with its size and display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// File name only (NOT the full path).
    pub name: CompactString,
    pub path: String,
    pub size: u64,
    #[serde(rename = "fileType")]
    pub file_type: FileCategory,
}

impl FileNode {
    /// Create a file node; the category is derived from the name's extension.
    pub fn new(name: &str, path: &Path, size: u64) -> Self {
        Self {
            name: CompactString::new(name),
            path: path.to_string_lossy().into_owned(),
            size,
            file_type: FileCategory::from_file_name(name),
        }
    }
}

/// A directory whose size is derived from its children.
///
/// Only built through [`super::aggregate::directory`], which guarantees
/// `size == Σ children.size`, size-descending order and a non-empty child list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: CompactString,
    pub path: String,
    pub size: u64,
    pub children: Vec<ScanNode>,
}

/// An entry excluded from the tree but reported to the user with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub name: String,
    pub path: String,
    pub reason: String,
}

impl SkippedEntry {
    /// Record an entry whose name the rendering layer cannot display.
    pub fn unsupported_characters(name: &str, path: &Path) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string_lossy().into_owned(),
            reason: UNSUPPORTED_CHARACTERS.to_string(),
        }
    }
}

/// Top-level output of a scan: the root's children plus every skipped entry
/// gathered across the whole subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub files: Vec<ScanNode>,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.skipped.is_empty()
    }

    /// Total logical size across all top-level nodes.
    pub fn total_size(&self) -> u64 {
        super::aggregate::total_size(&self.files)
    }

    pub fn file_count(&self) -> u64 {
        self.files.iter().map(ScanNode::file_count).sum()
    }
}
