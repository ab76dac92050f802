/// Bottom-up size aggregation and per-level ordering.
///
/// Children arrive with their sizes already final (files from stat,
/// directories from their own aggregation), so a directory's size is a
/// single sum over its direct children. Ordering is applied per sibling
/// group only; there is no global order across the tree.
use super::scan_node::{DirectoryNode, ScanNode};
use compact_str::CompactString;
use std::path::Path;

/// Sum of child sizes. Saturates rather than wrapping on absurd totals.
pub fn total_size(children: &[ScanNode]) -> u64 {
    children
        .iter()
        .fold(0u64, |acc, child| acc.saturating_add(child.size()))
}

/// Sort siblings by size descending.
///
/// `sort_by` is stable, so equal sizes keep their incoming (name) order.
pub fn sort_by_size_desc(children: &mut [ScanNode]) {
    children.sort_by(|a, b| b.size().cmp(&a.size()));
}

/// Build a directory node from a freshly populated child list.
///
/// Returns `None` when there are no children: empty and fully-filtered
/// directories are invisible in the result tree.
pub fn directory(name: &str, path: &Path, mut children: Vec<ScanNode>) -> Option<DirectoryNode> {
    if children.is_empty() {
        return None;
    }
    sort_by_size_desc(&mut children);
    Some(DirectoryNode {
        name: CompactString::new(name),
        path: path.to_string_lossy().into_owned(),
        size: total_size(&children),
        children,
    })
}
