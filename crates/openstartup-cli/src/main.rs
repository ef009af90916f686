//! # openstartup CLI entry point
//!
//! Parses command-line arguments, resolves the catalog configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use openstartup_catalog::{CatalogConfig, CONFIG_FILE_NAME};
use openstartup_cli::browse::{
    run_categories, run_list, run_related, CategoriesArgs, ListArgs, RelatedArgs,
};
use openstartup_cli::profile::{run_show, ShowArgs};
use openstartup_cli::validate::{run_validate, ValidateArgs};

/// OpenStartup: an open, multilingual directory of startups.
///
/// Validates startup records before submission and browses the catalog
/// from the terminal.
#[derive(Parser, Debug)]
#[command(name = "openstartup", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: openstartup.yaml at the repository root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate startup records before they are submitted.
    Validate(ValidateArgs),

    /// Search, filter and sort the catalog.
    List(ListArgs),

    /// List the category labels in use.
    Categories(CategoriesArgs),

    /// Show one startup profile.
    Show(ShowArgs),

    /// Find startups related to a given one.
    Related(RelatedArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "openstartup starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    // Resolve the repository root: walk up from CWD looking for the data
    // directory or a config file.
    let repo_root = resolve_repo_root().unwrap_or_else(|| {
        tracing::warn!("Could not locate repository root; using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let explicit = cli
        .config
        .as_deref()
        .map(|path| openstartup_cli::resolve_path(path, &repo_root));
    let config = CatalogConfig::load(explicit.as_deref(), &repo_root)
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Validate(args) => run_validate(&args, &config, &repo_root),
        Commands::List(args) => run_list(&args, &config),
        Commands::Categories(args) => run_categories(&args, &config),
        Commands::Show(args) => run_show(&args, &config),
        Commands::Related(args) => run_related(&args, &config),
    }
}

/// Walk up from the current directory to find the repository root.
///
/// The repo root is the first directory containing `public/data/startups/`
/// or an `openstartup.yaml`.
fn resolve_repo_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join("public/data/startups").is_dir() || dir.join(CONFIG_FILE_NAME).is_file() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
