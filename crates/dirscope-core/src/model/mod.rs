//! Data model for scan results.
//!
//! An owned tree of [`ScanNode`]s plus the skipped-entry side list, and the
//! aggregation helpers that keep directory sizes and ordering consistent.

pub mod aggregate;
pub mod file_type;
pub mod scan_node;
pub mod size;

pub use file_type::{categorise_extension, FileCategory};
pub use scan_node::{
    DirectoryNode, FileNode, ScanNode, ScanResult, SkippedEntry, UNSUPPORTED_CHARACTERS,
};
