//! Markdown renderer module
//!
//! Serializes the document model back to canonical ReleaseLogs.md
//! Markdown: blocks separated by exactly one blank line, no trailing
//! whitespace, a single trailing newline. For a canonically formatted
//! input, `render(parse(input))` reproduces the input byte for byte.

use crate::models::{Release, ReleaseLog, ReleaseLogStats, TITLE};

/// Render a complete document to Markdown
pub fn render(log: &ReleaseLog) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n", TITLE));

    for release in &log.releases {
        output.push('\n');
        output.push_str(&render_release(release));
    }

    output
}

/// Render a single version section to Markdown
pub fn render_release(release: &Release) -> String {
    let mut output = String::new();

    output.push_str(&format!("## v{}\n", release.version));

    render_subsection(&mut output, "Added", &release.added);
    render_subsection(&mut output, "Fixed", &release.fixed);

    let notes: Vec<&str> = release.notes.iter().map(|n| n.text.as_str()).collect();
    render_subsection(&mut output, "Important Notes", &notes);

    let included: Vec<&str> = release.included.iter().map(|e| e.text.as_str()).collect();
    render_subsection(&mut output, "Included Files", &included);

    output
}

/// Render one subsection heading and its bullet list
fn render_subsection<S: AsRef<str>>(output: &mut String, name: &str, bullets: &[S]) {
    output.push('\n');
    output.push_str(&format!("### {}\n", name));

    if !bullets.is_empty() {
        output.push('\n');
        for bullet in bullets {
            output.push_str(&format!("- {}\n", bullet.as_ref()));
        }
    }
}

/// Render the summary statistics table
pub fn render_summary(stats: &ReleaseLogStats) -> String {
    let mut output = String::new();

    output.push_str("## Summary\n\n");
    output.push_str("| Category | Count |\n");
    output.push_str("|----------|-------|\n");
    output.push_str(&format!("| Releases | {} |\n", stats.release_count));
    output.push_str(&format!("| Added | {} |\n", stats.added_count));
    output.push_str(&format!("| Fixed | {} |\n", stats.fixed_count));
    output.push_str(&format!("| Important Notes | {} |\n", stats.note_count));
    output.push_str(&format!("| Commands | {} |\n", stats.command_count));
    output.push_str(&format!("| Included Directories | {} |", stats.included_count));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    const CANONICAL: &str = "\
# Releaselogs

## v1.1.0

### Added

- Response timing scripts for STBR and ATD.

### Fixed

- Baud rate restore after STSBR.

### Important Notes

- **ATRTR** run twice for stable results.
- **STVR** and **STPIR** ADC resolution differs per chip.

### Included Files

- **STN_Scripts/** Individual command scripts.
- **SNAPS/** Reference snapshots.

## v1.0.0

### Added

- First release of the test scripts.

### Fixed

### Important Notes

- **AT@2** response is device specific.

### Included Files

- **Testing_logs/** Captured logs and the comparison entry point.
";

    #[test]
    fn test_round_trip_canonical() {
        let log = parser::parse(CANONICAL).unwrap();
        assert_eq!(render(&log), CANONICAL);
    }

    #[test]
    fn test_render_idempotent() {
        let log = parser::parse(CANONICAL).unwrap();
        let first = render(&log);
        let reparsed = parser::parse(&first).unwrap();
        assert_eq!(render(&reparsed), first);
    }

    #[test]
    fn test_render_normalizes_extra_blank_lines() {
        let loose = "# Releaselogs\n\n\n## v1.0.0\n\n\n### Added\n\n\n- Something.\n\n### Fixed\n\n### Important Notes\n\n### Included Files\n";
        let log = parser::parse(loose).unwrap();
        let canonical = render(&log);
        assert_ne!(canonical, loose);
        assert_eq!(
            canonical,
            "# Releaselogs\n\n## v1.0.0\n\n### Added\n\n- Something.\n\n### Fixed\n\n### Important Notes\n\n### Included Files\n"
        );
    }

    #[test]
    fn test_render_empty_document() {
        let log = crate::models::ReleaseLog::empty();
        assert_eq!(render(&log), "# Releaselogs\n");
    }

    #[test]
    fn test_render_empty_subsections() {
        let log = parser::parse("# Releaselogs\n\n## v0.1.0\n").unwrap();
        let output = render(&log);
        assert!(output.contains("### Added\n\n### Fixed\n\n### Important Notes\n\n### Included Files\n"));
    }

    #[test]
    fn test_render_summary_table() {
        let log = parser::parse(CANONICAL).unwrap();
        let output = render_summary(&log.stats());

        assert!(output.contains("## Summary"));
        assert!(output.contains("| Releases | 2 |"));
        assert!(output.contains("| Important Notes | 3 |"));
        assert!(output.contains("| Included Directories | 3 |"));
    }
}
