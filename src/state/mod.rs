//! State persistence module
//!
//! Tracks a content fingerprint per checked document so unchanged,
//! previously clean documents can be skipped. Stores state in JSON
//! format (.releaselogs-state.json).

mod types;

pub use types::{FileState, State};

use chrono::Utc;
use std::fs;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::error::{ReleaseLogError, Result};

/// Load state from a JSON file, defaulting to empty state if the file
/// does not exist yet
pub fn load(path: &Path) -> Result<State> {
    if !path.exists() {
        return Ok(State::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseLogError::State(format!("Cannot read state from '{}': {}", path.display(), e))
    })?;

    let state: State = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save state to a JSON file
pub fn save(state: &State, path: &Path) -> Result<()> {
    let mut state = state.clone();
    state.last_updated = Utc::now();

    let json = serde_json::to_string_pretty(&state)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    Ok(())
}

/// Fingerprint document content for change detection
pub fn fingerprint(content: &str) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Check whether a document is unchanged since its last clean check
pub fn is_unchanged_and_clean(state: &State, key: &str, content: &str) -> bool {
    state
        .files
        .get(key)
        .map(|f| f.clean && f.fingerprint == fingerprint(content))
        .unwrap_or(false)
}

/// Record the outcome of a check for a document
pub fn record_check(state: &mut State, key: String, content: &str, clean: bool) {
    state.files.insert(
        key,
        FileState {
            fingerprint: fingerprint(content),
            last_checked: Utc::now(),
            clean,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_defaults() {
        let state = load(Path::new("/nonexistent/state.json")).unwrap();
        assert!(state.files.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".releaselogs-state.json");

        let mut state = State::default();
        record_check(&mut state, "ReleaseLogs.md".to_string(), "# Releaselogs\n", true);
        save(&state, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.files.len(), 1);
        assert!(loaded.files["ReleaseLogs.md"].clean);
    }

    #[test]
    fn test_fingerprint_stable() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
    }

    #[test]
    fn test_is_unchanged_and_clean() {
        let mut state = State::default();
        let content = "# Releaselogs\n";

        assert!(!is_unchanged_and_clean(&state, "a.md", content));

        record_check(&mut state, "a.md".to_string(), content, true);
        assert!(is_unchanged_and_clean(&state, "a.md", content));
        assert!(!is_unchanged_and_clean(&state, "a.md", "# Releaselogs\n\n## v1.0.0\n"));
    }

    #[test]
    fn test_dirty_check_is_not_skipped() {
        let mut state = State::default();
        let content = "# Releaselogs\n";

        record_check(&mut state, "a.md".to_string(), content, false);
        assert!(!is_unchanged_and_clean(&state, "a.md", content));
    }
}
