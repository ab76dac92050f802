//! dirscope core: recursive size scanner, exclusion policy and data model.
//!
//! This crate contains all scanning logic with no frontend dependencies.
//! Web servers, CLIs and GUIs consume [`scanner::scan`] and the documents in
//! [`api`].
//!
//! # Modules
//!
//! - [`model`]: Owned scan tree, skipped entries and size aggregation.
//! - [`policy`]: Ignore rules and the unsupported-character check.
//! - [`platform`]: File-system primitives, short-name/long-path fallbacks, drives.
//! - [`scanner`]: Validation, the recursive walker and background scans.
//! - [`browse`]: One-level subdirectory listing for folder pickers.
//! - [`api`]: Request/response JSON documents.
//! - [`config`]: Scan configuration loaded from JSON.
//! - [`error`]: Errors that cross the crate boundary.

pub mod api;
pub mod browse;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod policy;
pub mod scanner;

pub use config::ScanConfig;
pub use error::ScanError;
pub use model::{ScanNode, ScanResult, SkippedEntry};
pub use scanner::{scan, scan_with, start_scan};
