use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::{ReleaseLogError, Result};
use crate::models::ReleaseLog;
use crate::parser;
use crate::renderer;

/// Display the newest version section
pub fn latest(config_path: Option<PathBuf>) -> Result<()> {
    let log = load_document(config_path)?;

    let release = log.latest().ok_or_else(|| {
        ReleaseLogError::Document(
            "document has no version sections. Run 'releaselogs new' first.".to_string(),
        )
    })?;

    display::print_markdown(&renderer::render_release(release));
    Ok(())
}

/// Display one version section by version string
pub fn version(config_path: Option<PathBuf>, version: &str) -> Result<()> {
    let log = load_document(config_path)?;

    // Accept both "1.0.0" and "v1.0.0"
    let wanted = version.strip_prefix('v').unwrap_or(version);

    let release = log.find(wanted).ok_or_else(|| {
        ReleaseLogError::Document(format!("no section for version 'v{}'", wanted))
    })?;

    display::print_markdown(&renderer::render_release(release));
    Ok(())
}

/// Display the document summary table
pub fn summary(config_path: Option<PathBuf>) -> Result<()> {
    let log = load_document(config_path)?;
    display::print_markdown(&renderer::render_summary(&log.stats()));
    Ok(())
}

/// Load and parse the configured document
fn load_document(config_path: Option<PathBuf>) -> Result<ReleaseLog> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("releaselogs.toml"));
    let config = config::load(&config_path)?;

    let content = fs::read_to_string(&config.log_file).map_err(|e| {
        ReleaseLogError::Document(format!(
            "Cannot read '{}': {}. Run 'releaselogs new' to create it.",
            config.log_file.display(),
            e
        ))
    })?;

    parser::parse(&content)
}
