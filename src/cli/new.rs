use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::{ReleaseLogError, Result};
use crate::models::{parse_semver, Release, ReleaseLog};
use crate::parser;
use crate::renderer;

/// Prepend a new version section to the document
pub fn run(
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
    version: String,
    added: Vec<String>,
    fixed: Vec<String>,
) -> Result<()> {
    let semver = parse_semver(&version).ok_or_else(|| {
        ReleaseLogError::Document(format!(
            "invalid version '{}' (expected a dotted numeric triple like 1.0.0)",
            version
        ))
    })?;

    let path = match file {
        Some(path) => path,
        None => {
            let config_path = config_path.unwrap_or_else(|| PathBuf::from("releaselogs.toml"));
            config::load(&config_path)?.log_file
        }
    };

    let mut log = if path.exists() {
        let content = fs::read_to_string(&path)?;
        parser::parse(&content)?
    } else {
        println!("Creating new document: {}", path.display());
        ReleaseLog::empty()
    };

    if log.find(&version).is_some() {
        return Err(ReleaseLogError::Document(format!(
            "version 'v{}' already exists in '{}'",
            version,
            path.display()
        )));
    }

    if let Some(latest) = log.latest() {
        if let Some(latest_semver) = latest.semver() {
            if semver <= latest_semver {
                eprintln!(
                    "Warning: v{} is not newer than the current latest v{}",
                    version, latest.version
                );
            }
        }
    }

    let mut release = Release::empty(&version);
    release.added = added;
    release.fixed = fixed;
    log.releases.insert(0, release);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, renderer::render(&log))?;
    println!("Added section v{} to {}", version, path.display());

    Ok(())
}
