use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Release log tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The release log document operated on by default
    pub log_file: PathBuf,

    /// Path to state file for incremental check tracking
    pub state_file: PathBuf,

    /// Roots scanned by `check --all` for ReleaseLogs.md documents
    pub search_dirs: Vec<PathBuf>,

    /// Check limits
    pub limits: Limits,

    /// Display settings
    pub display: Display,
}

/// Limits for checking and discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum violations printed per file
    pub max_violations: usize,

    /// Maximum directory depth scanned under a search root
    pub max_depth: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Print rule ids next to violations (useful when scripting around
    /// the output, disable for compact reading)
    pub show_rule_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("./ReleaseLogs.md"),
            state_file: PathBuf::from("./.releaselogs-state.json"),
            search_dirs: vec![PathBuf::from(".")],
            limits: Limits::default(),
            display: Display::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_violations: 50,
            max_depth: 8,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { show_rule_ids: true }
    }
}
