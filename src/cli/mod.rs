//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - check: Validate a document (or all discovered documents)
//! - fmt: Rewrite a document in canonical form
//! - new: Prepend a version section
//! - show latest / version / summary: Display document content
//! - state reset: Reset incremental check tracking

pub mod check;
pub mod config;
pub mod fmt;
pub mod new;
pub mod show;
pub mod state;
