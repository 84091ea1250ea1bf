use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State tracking for incremental checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// State file format version
    pub version: String,

    /// Last time state was updated
    pub last_updated: DateTime<Utc>,

    /// Per-document state, keyed by path
    pub files: HashMap<String, FileState>,
}

/// State for a single checked document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileState {
    /// Fingerprint of the document content at the last check
    pub fingerprint: String,

    /// When the document was last checked
    pub last_checked: DateTime<Utc>,

    /// Whether the last check found no violations
    pub clean: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            last_updated: Utc::now(),
            files: HashMap::new(),
        }
    }
}
