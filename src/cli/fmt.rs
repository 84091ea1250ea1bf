use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::{ReleaseLogError, Result};
use crate::parser;
use crate::renderer;

/// Rewrite a document in canonical form, or verify it with --check
pub fn run(config_path: Option<PathBuf>, file: Option<PathBuf>, check_only: bool) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => {
            let config_path = config_path.unwrap_or_else(|| PathBuf::from("releaselogs.toml"));
            config::load(&config_path)?.log_file
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        ReleaseLogError::Document(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let log = parser::parse(&content)?;
    let canonical = renderer::render(&log);

    if canonical == content {
        println!("{}: already canonical", path.display());
        return Ok(());
    }

    if check_only {
        return Err(ReleaseLogError::Lint(format!(
            "'{}' is not canonically formatted",
            path.display()
        )));
    }

    fs::write(&path, canonical)?;
    println!("Reformatted: {}", path.display());

    Ok(())
}
