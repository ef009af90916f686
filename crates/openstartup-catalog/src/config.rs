//! Catalog configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults ([`CatalogConfig::default`]).
//! 2. A YAML file: `openstartup.yaml` at the repository root, or the path
//!    given with `--config`.
//! 3. Environment: `OPENSTARTUP_DATA_DIR` and `OPENSTARTUP_ENV`.
//!
//! A relative `data_dir` is resolved against the repository root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "openstartup.yaml";

/// Overrides `data_dir`.
pub const ENV_DATA_DIR: &str = "OPENSTARTUP_DATA_DIR";

/// `production` selects [`Mode::Production`]; anything else is development.
pub const ENV_MODE: &str = "OPENSTARTUP_ENV";

/// Data directory relative to the repository root.
pub const DEFAULT_DATA_DIR: &str = "public/data/startups";

/// URL prefix for assets when deployed.
pub const DEFAULT_BASE_PATH: &str = "/openstartup";

/// The catalog as first published.
pub const DEFAULT_SLUGS: [&str; 6] = [
    "acme-ai",
    "fintech-pro",
    "healthtech-solutions",
    "edtech-academy",
    "greentech-innovations",
    "blockchain-ventures",
];

/// Deployment mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Interpret an `OPENSTARTUP_ENV` value.
    pub fn from_env_value(value: &str) -> Self {
        if value == "production" {
            Mode::Production
        } else {
            Mode::Development
        }
    }
}

/// Where the records live and how their assets are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory holding `<slug>.json` files.
    pub data_dir: PathBuf,
    /// Known records, in catalog order.
    pub slugs: Vec<String>,
    /// Prefix applied to asset paths in production.
    pub base_path: String,
    pub mode: Mode,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            slugs: DEFAULT_SLUGS.iter().map(|s| s.to_string()).collect(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            mode: Mode::Development,
        }
    }
}

impl CatalogConfig {
    /// Parse YAML. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Read and parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| CatalogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration for `repo_root`.
    ///
    /// An explicit path must exist. Without one, `openstartup.yaml` at the
    /// root is used if present. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>, repo_root: &Path) -> Result<Self, CatalogError> {
        let default_file = repo_root.join(CONFIG_FILE_NAME);
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if default_file.is_file() => Self::from_file(&default_file)?,
            None => Self::default(),
        };
        let config = config
            .with_env_overrides(|key| std::env::var(key).ok())
            .resolved_against(repo_root);
        tracing::debug!(?config, "catalog configuration");
        Ok(config)
    }

    /// Apply `OPENSTARTUP_DATA_DIR` and `OPENSTARTUP_ENV` as reported by
    /// `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = Mode::from_env_value(&mode);
        }
        self
    }

    /// Make a relative `data_dir` relative to `root` instead of the
    /// working directory.
    pub fn resolved_against(mut self, root: &Path) -> Self {
        if self.data_dir.is_relative() {
            self.data_dir = root.join(&self.data_dir);
        }
        self
    }

    /// URL path for a public asset.
    ///
    /// A leading `/` is added if missing; in production the path is also
    /// prefixed with `base_path`.
    pub fn asset_path(&self, path: &str) -> String {
        let base = match self.mode {
            Mode::Production => self.base_path.as_str(),
            Mode::Development => "",
        };
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
