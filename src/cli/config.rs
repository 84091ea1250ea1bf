use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize releaselogs.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from("releaselogs.toml"));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    // Save default configuration
    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to point log_file at your ReleaseLogs.md",
        config_path.display()
    );
    println!("2. Run 'releaselogs new 1.0.0' to start a document, or 'releaselogs check' to validate an existing one");

    Ok(())
}
