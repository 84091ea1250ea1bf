use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entry::Release;

/// Document title, rendered as `# Releaselogs`
pub const TITLE: &str = "Releaselogs";

/// The four subsections every version section carries, in contract order
pub const SECTION_ORDER: [&str; 4] = ["Added", "Fixed", "Important Notes", "Included Files"];

/// A parsed release log document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseLog {
    /// Version sections in document order (newest first)
    pub releases: Vec<Release>,
}

/// Summary statistics for a release log document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLogStats {
    /// Number of version sections
    pub release_count: usize,
    /// Total bullets under Added
    pub added_count: usize,
    /// Total bullets under Fixed
    pub fixed_count: usize,
    /// Total bullets under Important Notes
    pub note_count: usize,
    /// Distinct command tokens named across all notes
    pub command_count: usize,
    /// Total bullets under Included Files
    pub included_count: usize,
}

impl ReleaseLog {
    /// An empty document (title only)
    pub fn empty() -> Self {
        Self { releases: Vec::new() }
    }

    /// Compute summary statistics from the document
    pub fn stats(&self) -> ReleaseLogStats {
        let release_count = self.releases.len();
        let added_count = self.releases.iter().map(|r| r.added.len()).sum();
        let fixed_count = self.releases.iter().map(|r| r.fixed.len()).sum();
        let note_count = self.releases.iter().map(|r| r.notes.len()).sum();
        let included_count = self.releases.iter().map(|r| r.included.len()).sum();

        let commands: BTreeSet<&str> = self
            .releases
            .iter()
            .flat_map(|r| r.commands())
            .collect();

        ReleaseLogStats {
            release_count,
            added_count,
            fixed_count,
            note_count,
            command_count: commands.len(),
            included_count,
        }
    }

    /// Check if the document has any version sections
    pub fn has_releases(&self) -> bool {
        !self.releases.is_empty()
    }

    /// The newest version section (first in document order)
    pub fn latest(&self) -> Option<&Release> {
        self.releases.first()
    }

    /// Find a version section by its version string
    pub fn find(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.version == version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::{IncludedEntry, NoteItem};

    fn sample_log() -> ReleaseLog {
        ReleaseLog {
            releases: vec![
                Release {
                    version: "1.1.0".to_string(),
                    line: 3,
                    added: vec![
                        "Response timing scripts.".to_string(),
                        "Snapshot capture on every run.".to_string(),
                    ],
                    fixed: vec!["Baud rate restore after STSBR.".to_string()],
                    notes: vec![
                        NoteItem {
                            text: "**ATRTR** run twice for stable results.".to_string(),
                            line: 11,
                        },
                        NoteItem {
                            text: "**STVR** and **STPIR** ADC resolution differs per chip."
                                .to_string(),
                            line: 12,
                        },
                    ],
                    included: vec![IncludedEntry {
                        text: "**STN_Scripts/** Individual command scripts.".to_string(),
                        line: 16,
                    }],
                },
                Release {
                    version: "1.0.0".to_string(),
                    line: 18,
                    added: vec!["First release of the test scripts.".to_string()],
                    fixed: vec![],
                    notes: vec![NoteItem {
                        text: "**STVR** reads are hardware dependent.".to_string(),
                        line: 24,
                    }],
                    included: vec![IncludedEntry {
                        text: "**SNAPS/** Reference snapshots.".to_string(),
                        line: 28,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_stats_empty() {
        let log = ReleaseLog::empty();
        let stats = log.stats();
        assert_eq!(stats.release_count, 0);
        assert_eq!(stats.added_count, 0);
        assert_eq!(stats.fixed_count, 0);
        assert_eq!(stats.note_count, 0);
        assert_eq!(stats.command_count, 0);
        assert_eq!(stats.included_count, 0);
        assert!(!log.has_releases());
    }

    #[test]
    fn test_stats_with_data() {
        let log = sample_log();
        let stats = log.stats();
        assert_eq!(stats.release_count, 2);
        assert_eq!(stats.added_count, 3);
        assert_eq!(stats.fixed_count, 1);
        assert_eq!(stats.note_count, 3);
        // STVR appears in both sections but counts once
        assert_eq!(stats.command_count, 3);
        assert_eq!(stats.included_count, 2);
    }

    #[test]
    fn test_latest_is_first() {
        let log = sample_log();
        assert_eq!(log.latest().map(|r| r.version.as_str()), Some("1.1.0"));
    }

    #[test]
    fn test_find_version() {
        let log = sample_log();
        assert!(log.find("1.0.0").is_some());
        assert!(log.find("2.0.0").is_none());
    }
}
