use serde::{Deserialize, Serialize};

/// Extract the `**bold**` spans of a bullet, in order of appearance.
///
/// Unterminated markers are ignored, as are empty spans (`****`).
pub fn bold_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut remainder = text;

    while let Some(start) = remainder.find("**") {
        let after = &remainder[start + 2..];
        match after.find("**") {
            Some(end) => {
                let span = &after[..end];
                if !span.is_empty() {
                    spans.push(span);
                }
                remainder = &after[end + 2..];
            }
            None => break,
        }
    }

    spans
}

// ============================================================================
// Version Section
// ============================================================================

/// A single `## v<version>` section of the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Version string as written after the `v` prefix (e.g. "1.0.0")
    pub version: String,
    /// Line number of the section heading (1-based)
    pub line: usize,
    /// Bullets under `### Added`
    pub added: Vec<String>,
    /// Bullets under `### Fixed`
    pub fixed: Vec<String>,
    /// Bullets under `### Important Notes`
    pub notes: Vec<NoteItem>,
    /// Bullets under `### Included Files`
    pub included: Vec<IncludedEntry>,
}

impl Release {
    /// Create an empty section for a version
    pub fn empty(version: &str) -> Self {
        Self {
            version: version.to_string(),
            line: 0,
            added: Vec::new(),
            fixed: Vec::new(),
            notes: Vec::new(),
            included: Vec::new(),
        }
    }

    /// Parse the version string as a dotted numeric triple
    pub fn semver(&self) -> Option<(u64, u64, u64)> {
        parse_semver(&self.version)
    }

    /// Total number of bullets across all four subsections
    pub fn item_count(&self) -> usize {
        self.added.len() + self.fixed.len() + self.notes.len() + self.included.len()
    }

    /// All command tokens named in this section's notes, in document order
    pub fn commands(&self) -> Vec<&str> {
        self.notes.iter().flat_map(|n| n.commands()).collect()
    }
}

/// Parse a `major.minor.patch` string with purely numeric components
pub fn parse_semver(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

// ============================================================================
// Note Models
// ============================================================================

/// An `Important Notes` bullet: one or more bold command tokens plus
/// free-text caveat prose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteItem {
    /// Full bullet text after the `- ` marker, exactly as written
    pub text: String,
    /// Line number in the source document (1-based)
    pub line: usize,
}

impl NoteItem {
    /// Command tokens named in bold in this bullet
    pub fn commands(&self) -> Vec<&str> {
        bold_spans(&self.text)
    }
}

// ============================================================================
// Included Files Models
// ============================================================================

/// An `Included Files` bullet: one bold directory name with a trailing
/// slash followed by a one-line description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludedEntry {
    /// Full bullet text after the `- ` marker, exactly as written
    pub text: String,
    /// Line number in the source document (1-based)
    pub line: usize,
}

impl IncludedEntry {
    /// The directory token, if the bullet starts with a single bold
    /// name ending in `/`
    pub fn directory(&self) -> Option<&str> {
        let spans = bold_spans(&self.text);
        let first = *spans.first()?;
        if spans.len() != 1 || !first.ends_with('/') {
            return None;
        }
        if !self.text.starts_with("**") {
            return None;
        }
        Some(first)
    }

    /// Description text after the directory token
    pub fn description(&self) -> &str {
        match self.text.find("**").and_then(|start| {
            let after = start + 2;
            self.text[after..].find("**").map(|end| after + end + 2)
        }) {
            Some(rest) => self.text[rest..].trim_start(),
            None => self.text.as_str(),
        }
    }
}
