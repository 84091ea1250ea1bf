//! Release log parser module
//!
//! Line-based Markdown parsing of ReleaseLogs.md documents into the
//! document model. Strict about gross shape (headings in the wrong
//! place, stray content), tolerant about everything the lint rules
//! check (missing or misordered subsections, malformed bullets).

use crate::error::{ReleaseLogError, Result};
use crate::models::{IncludedEntry, NoteItem, Release, ReleaseLog, TITLE};

/// Subsection currently receiving bullets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subsection {
    Added,
    Fixed,
    Notes,
    Included,
}

fn subsection_for(name: &str) -> Option<Subsection> {
    match name {
        "Added" => Some(Subsection::Added),
        "Fixed" => Some(Subsection::Fixed),
        "Important Notes" => Some(Subsection::Notes),
        "Included Files" => Some(Subsection::Included),
        _ => None,
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> ReleaseLogError {
    ReleaseLogError::Parse {
        line,
        message: message.into(),
    }
}

/// Parse a release log document
pub fn parse(input: &str) -> Result<ReleaseLog> {
    let mut releases: Vec<Release> = Vec::new();
    let mut current: Option<Release> = None;
    let mut section: Option<Subsection> = None;
    let mut title_seen = false;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            if current.is_none() {
                return Err(parse_error(
                    line_no,
                    "subsection heading outside a version section",
                ));
            }

            let name = rest.trim();
            section = match subsection_for(name) {
                Some(s) => Some(s),
                None => {
                    return Err(parse_error(line_no, format!("unknown subsection '{}'", name)))
                }
            };
        } else if let Some(rest) = line.strip_prefix("## ") {
            if !title_seen {
                return Err(parse_error(line_no, "version section before document title"));
            }

            if let Some(release) = current.take() {
                releases.push(release);
            }

            let version = rest.trim().strip_prefix('v').ok_or_else(|| {
                parse_error(line_no, "version heading must use the form '## v<version>'")
            })?;

            let mut release = Release::empty(version);
            release.line = line_no;
            current = Some(release);
            section = None;
        } else if let Some(rest) = line.strip_prefix("# ") {
            if title_seen {
                return Err(parse_error(line_no, "duplicate document title"));
            }

            let text = rest.trim();
            if text != TITLE {
                return Err(parse_error(
                    line_no,
                    format!("expected '# {}' as the document title, found '# {}'", TITLE, text),
                ));
            }

            title_seen = true;
        } else if let Some(rest) = line.strip_prefix("- ") {
            let release = current
                .as_mut()
                .ok_or_else(|| parse_error(line_no, "bullet outside a version section"))?;

            match section {
                Some(Subsection::Added) => release.added.push(rest.to_string()),
                Some(Subsection::Fixed) => release.fixed.push(rest.to_string()),
                Some(Subsection::Notes) => release.notes.push(NoteItem {
                    text: rest.to_string(),
                    line: line_no,
                }),
                Some(Subsection::Included) => release.included.push(IncludedEntry {
                    text: rest.to_string(),
                    line: line_no,
                }),
                None => {
                    return Err(parse_error(line_no, "bullet outside a subsection"));
                }
            }
        } else {
            return Err(parse_error(
                line_no,
                format!("unexpected content: '{}'", line.trim()),
            ));
        }
    }

    if !title_seen {
        return Err(parse_error(1, format!("missing '# {}' title", TITLE)));
    }

    if let Some(release) = current.take() {
        releases.push(release);
    }

    Ok(ReleaseLog { releases })
}
