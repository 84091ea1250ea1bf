//! Structural lint module
//!
//! Validates a parsed document against the release log content
//! contract: subsection presence and order, bold command tokens in
//! notes, directory tokens in included-files bullets, version
//! well-formedness and uniqueness, and canonical formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ReleaseLog, SECTION_ORDER};
use crate::renderer;

/// Lint rules, identified by a stable id used in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The four subsections are present exactly once, in order
    Sections,
    /// Every note bullet names at least one bold command token
    NoteCommands,
    /// Every included-files bullet names exactly one bold directory
    IncludedDir,
    /// Version strings are dotted numeric triples
    VersionFormat,
    /// No duplicate version sections
    VersionUnique,
    /// The document bytes match their canonical re-serialization
    Canonical,
}

impl Rule {
    pub fn id(&self) -> &'static str {
        match self {
            Rule::Sections => "sections",
            Rule::NoteCommands => "note-commands",
            Rule::IncludedDir => "included-dir",
            Rule::VersionFormat => "version-format",
            Rule::VersionUnique => "version-unique",
            Rule::Canonical => "canonical",
        }
    }
}

/// A single rule violation with its source location
#[derive(Debug, Clone)]
pub struct Violation {
    pub rule: Rule,
    /// 1-based line number in the source document
    pub line: usize,
    pub message: String,
}

impl Violation {
    fn new(rule: Rule, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            line,
            message: message.into(),
        }
    }
}

/// Check a document against all rules
///
/// Takes both the parsed model and the source text: bullet-level rules
/// work on the model, the sections rule re-scans heading lines for
/// accurate locations, and the canonical rule compares raw bytes.
pub fn check(source: &str, log: &ReleaseLog) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_sections(source, &mut violations);
    check_notes(log, &mut violations);
    check_included(log, &mut violations);
    check_versions(log, &mut violations);

    // Formatting is only meaningful once the structure is right;
    // structural violations already imply a non-canonical rendering.
    if violations.is_empty() {
        check_canonical(source, log, &mut violations);
    }

    violations.sort_by_key(|v| v.line);
    violations
}

/// Subsection presence, uniqueness, and order per version section
fn check_sections(source: &str, violations: &mut Vec<Violation>) {
    // (version heading line, seen subsection names with their lines)
    let mut sections: Vec<(usize, Vec<(String, usize)>)> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if let Some(name) = line.strip_prefix("### ") {
            if let Some((_, seen)) = sections.last_mut() {
                seen.push((name.trim().to_string(), line_no));
            }
        } else if line.starts_with("## ") {
            sections.push((line_no, Vec::new()));
        }
    }

    for (heading_line, seen) in &sections {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (name, _) in seen {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }

        let mut complete = true;
        for expected in SECTION_ORDER {
            match counts.get(expected) {
                None => {
                    complete = false;
                    violations.push(Violation::new(
                        Rule::Sections,
                        *heading_line,
                        format!("missing subsection '### {}'", expected),
                    ));
                }
                Some(n) if *n > 1 => {
                    complete = false;
                    let dup_line = seen
                        .iter()
                        .filter(|(name, _)| name == expected)
                        .nth(1)
                        .map(|(_, line)| *line)
                        .unwrap_or(*heading_line);
                    violations.push(Violation::new(
                        Rule::Sections,
                        dup_line,
                        format!("duplicate subsection '### {}'", expected),
                    ));
                }
                Some(_) => {}
            }
        }

        if complete {
            let order: Vec<&str> = seen.iter().map(|(name, _)| name.as_str()).collect();
            if order != SECTION_ORDER {
                violations.push(Violation::new(
                    Rule::Sections,
                    *heading_line,
                    format!("subsections out of order (expected {})", SECTION_ORDER.join(", ")),
                ));
            }
        }
    }
}

/// Every note bullet must name at least one bold command token
fn check_notes(log: &ReleaseLog, violations: &mut Vec<Violation>) {
    for release in &log.releases {
        for note in &release.notes {
            if note.commands().is_empty() {
                violations.push(Violation::new(
                    Rule::NoteCommands,
                    note.line,
                    "note names no bold command token",
                ));
            }
        }
    }
}

/// Every included-files bullet must name exactly one bold directory
/// ending in '/', followed by a description
fn check_included(log: &ReleaseLog, violations: &mut Vec<Violation>) {
    for release in &log.releases {
        for entry in &release.included {
            match entry.directory() {
                None => {
                    violations.push(Violation::new(
                        Rule::IncludedDir,
                        entry.line,
                        "bullet must start with exactly one bold directory ending in '/'",
                    ));
                }
                Some(_) if entry.description().is_empty() => {
                    violations.push(Violation::new(
                        Rule::IncludedDir,
                        entry.line,
                        "directory has no description",
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

/// Version strings are numeric triples and appear only once
fn check_versions(log: &ReleaseLog, violations: &mut Vec<Violation>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for release in &log.releases {
        if release.semver().is_none() {
            violations.push(Violation::new(
                Rule::VersionFormat,
                release.line,
                format!("version '{}' is not a dotted numeric triple", release.version),
            ));
        }

        if let Some(first_line) = seen.get(release.version.as_str()) {
            violations.push(Violation::new(
                Rule::VersionUnique,
                release.line,
                format!(
                    "duplicate version 'v{}' (first seen at line {})",
                    release.version, first_line
                ),
            ));
        } else {
            seen.insert(&release.version, release.line);
        }
    }
}

/// The source must match its canonical re-serialization
fn check_canonical(source: &str, log: &ReleaseLog, violations: &mut Vec<Violation>) {
    if renderer::render(log) != source {
        violations.push(Violation::new(
            Rule::Canonical,
            1,
            "document is not canonically formatted (run 'releaselogs fmt')",
        ));
    }
}

// ============================================================================
// Check Report
// ============================================================================

/// JSON report for a single checked file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// When the check ran
    pub generated_at: DateTime<Utc>,
    /// Path of the checked document
    pub file: String,
    /// True when no rule was violated
    pub ok: bool,
    /// Violations in source order
    pub violations: Vec<ViolationRecord>,
}

/// Serializable form of a violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub rule: String,
    pub line: usize,
    pub message: String,
}

impl CheckReport {
    pub fn new(file: &str, violations: &[Violation]) -> Self {
        Self {
            generated_at: Utc::now(),
            file: file.to_string(),
            ok: violations.is_empty(),
            violations: violations
                .iter()
                .map(|v| ViolationRecord {
                    rule: v.rule.id().to_string(),
                    line: v.line,
                    message: v.message.clone(),
                })
                .collect(),
        }
    }
}
