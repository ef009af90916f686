//! Errors that stop the catalog from being configured or read at all.
//!
//! Per-record problems are not errors here; the loader logs and skips them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("data directory {} does not exist", .0.display())]
    DataDirMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
