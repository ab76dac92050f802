//! Platform layer: file-system primitives, path-quirk fallbacks and drive
//! enumeration.

pub mod alt_path;
pub mod drives;
pub mod fs;

pub use drives::{default_browse_root, list_drives};
pub use fs::{EntryStat, FileSystem, NativeFs};
