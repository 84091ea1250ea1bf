mod cli;
mod config;
mod display;
mod error;
mod finder;
mod lint;
mod models;
mod parser;
mod renderer;
mod state;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "releaselogs")]
#[command(about = "Parse, validate, and maintain ReleaseLogs.md documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// State management commands
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
    /// Validate a release log document
    Check {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Document to check (defaults to the configured log_file)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Check every ReleaseLogs.md found under the configured search_dirs
        #[arg(long)]
        all: bool,

        /// Emit a JSON report instead of human-readable output
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a document in canonical form
    Fmt {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Document to format (defaults to the configured log_file)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only verify formatting, exit non-zero when not canonical
        #[arg(long)]
        check: bool,
    },
    /// Prepend a new version section
    New {
        /// Version for the new section (e.g. 1.2.0)
        version: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Document to modify (defaults to the configured log_file)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Seed an Added bullet (repeatable)
        #[arg(long)]
        added: Vec<String>,

        /// Seed a Fixed bullet (repeatable)
        #[arg(long)]
        fixed: Vec<String>,
    },
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// Display the newest version section
    Latest {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Display one version section
    Version {
        /// Version to display (e.g. 1.0.0)
        version: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Display the document summary table
    Summary {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize releaselogs.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum StateCommands {
    /// Reset incremental check tracking
    Reset {
        /// Path to the config file (defaults to releaselogs.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::State { command } => match command {
            StateCommands::Reset { config } => cli::state::reset(config),
        },
        Commands::Check {
            config,
            file,
            all,
            json,
        } => cli::check::run(config, file, all, json),
        Commands::Fmt {
            config,
            file,
            check,
        } => cli::fmt::run(config, file, check),
        Commands::New {
            version,
            config,
            file,
            added,
            fixed,
        } => cli::new::run(config, file, version, added, fixed),
        Commands::Show { command } => match command {
            ShowCommands::Latest { config } => cli::show::latest(config),
            ShowCommands::Version { version, config } => cli::show::version(config, &version),
            ShowCommands::Summary { config } => cli::show::summary(config),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
