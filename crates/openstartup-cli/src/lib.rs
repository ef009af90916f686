//! # openstartup-cli — The `openstartup` Command
//!
//! ## Subcommands
//!
//! - `openstartup validate` — check one record, or every record, before a
//!   pull request.
//! - `openstartup list` — search, filter and sort the catalog.
//! - `openstartup categories` — category labels for one language.
//! - `openstartup show` — a single profile.
//! - `openstartup related` — profiles similar to a given one.
//!
//! ```bash
//! openstartup validate acme-ai
//! openstartup validate --all --strict
//! openstartup list --category Technology --sort-by founded --order desc
//! openstartup show acme-ai --lang pt
//! ```
//!
//! Every handler returns the process exit code: 0 on success, 1 on an
//! invalid record, unknown slug or missing argument. Operational failures
//! surface as `Err` and `main` exits with 2.

pub mod browse;
pub mod profile;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format shared by the subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it stays relative to the current
/// directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
