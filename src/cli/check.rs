use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::{ReleaseLogError, Result};
use crate::finder::Finder;
use crate::lint::{self, CheckReport, Violation, ViolationRecord};
use crate::parser;
use crate::state;

/// Check one or all release log documents
pub fn run(
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
    all: bool,
    json: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("releaselogs.toml"));
    let config = config::load(&config_path)?;

    let mut state = state::load(&config.state_file)?;

    // Determine target documents
    let targets: Vec<PathBuf> = if all {
        let found = Finder::new(&config).find()?;
        if found.is_empty() {
            return Err(ReleaseLogError::Document(
                "No ReleaseLogs.md documents found under the configured search_dirs".to_string(),
            ));
        }
        found
    } else {
        vec![file.unwrap_or_else(|| config.log_file.clone())]
    };

    let mut reports = Vec::new();
    let mut total_violations = 0;
    let mut dirty_files = 0;
    let mut skipped = 0;

    for path in &targets {
        let key = path.to_string_lossy().to_string();

        let content = fs::read_to_string(path).map_err(|e| {
            ReleaseLogError::Document(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        // Unchanged since the last clean run: nothing to do
        if state::is_unchanged_and_clean(&state, &key, &content) {
            skipped += 1;
            if !json {
                println!("{}: unchanged since last clean check, skipped", path.display());
            }
            continue;
        }

        let report = match parser::parse(&content) {
            Ok(log) => {
                let violations = lint::check(&content, &log);
                state::record_check(&mut state, key, &content, violations.is_empty());

                if !json {
                    print_violations(&config, path, &violations);
                }

                total_violations += violations.len();
                if !violations.is_empty() {
                    dirty_files += 1;
                }

                CheckReport::new(&path.to_string_lossy(), &violations)
            }
            Err(err) => {
                state::record_check(&mut state, key, &content, false);
                total_violations += 1;
                dirty_files += 1;

                if !json {
                    println!("{}: {}", path.display(), err);
                }

                parse_failure_report(&path.to_string_lossy(), &err)
            }
        };

        reports.push(report);
    }

    state::save(&state, &config.state_file)?;

    if json {
        if all {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else if let Some(report) = reports.first() {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    } else if total_violations == 0 {
        let checked = targets.len() - skipped;
        println!("Checked {} file(s), no violations.", checked);
    }

    if total_violations > 0 {
        return Err(ReleaseLogError::Lint(format!(
            "{} violation(s) in {} file(s)",
            total_violations, dirty_files
        )));
    }

    Ok(())
}

/// Print human-readable violations for one document
fn print_violations(config: &config::Config, path: &std::path::Path, violations: &[Violation]) {
    if violations.is_empty() {
        println!("{}: OK", path.display());
        return;
    }

    let max = config.limits.max_violations;
    for violation in violations.iter().take(max) {
        if config.display.show_rule_ids {
            println!(
                "{}:{}: [{}] {}",
                path.display(),
                violation.line,
                violation.rule.id(),
                violation.message
            );
        } else {
            println!("{}:{}: {}", path.display(), violation.line, violation.message);
        }
    }

    if violations.len() > max {
        println!("... and {} more", violations.len() - max);
    }
}

/// Report for a document that did not parse at all
fn parse_failure_report(file: &str, err: &ReleaseLogError) -> CheckReport {
    let line = match err {
        ReleaseLogError::Parse { line, .. } => *line,
        _ => 0,
    };

    let mut report = CheckReport::new(file, &[]);
    report.ok = false;
    report.violations.push(ViolationRecord {
        rule: "parse".to_string(),
        line,
        message: err.to_string(),
    });
    report
}
