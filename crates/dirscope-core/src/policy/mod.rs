//! Exclusion policy applied to every entry the walker encounters.
//!
//! Two distinct outcomes: [`IgnorePolicy`] matches are dropped silently,
//! [`CharsetPolicy`] matches are recorded as skipped entries.

pub mod charset;
pub mod ignore;

pub use charset::{CharsetPolicy, CodepointRange};
pub use ignore::IgnorePolicy;
