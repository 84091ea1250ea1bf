//! Data models module
//!
//! Defines the release log document model: ReleaseLog, Release,
//! NoteItem, IncludedEntry, and ReleaseLogStats.

pub mod document;
pub mod entry;

pub use document::{ReleaseLog, ReleaseLogStats, SECTION_ORDER, TITLE};
pub use entry::{bold_spans, parse_semver, IncludedEntry, NoteItem, Release};
