//! # Record Loading
//!
//! Best effort: one bad file never hides the rest of the catalog. Only a
//! missing data directory is an error.

use std::path::Path;

use openstartup_core::Startup;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Load every configured slug, in configured order.
///
/// Unreadable or unparseable records are logged at `warn` and skipped.
pub fn load_catalog(config: &CatalogConfig) -> Result<Vec<Startup>, CatalogError> {
    if !config.data_dir.is_dir() {
        return Err(CatalogError::DataDirMissing(config.data_dir.clone()));
    }

    let mut startups = Vec::with_capacity(config.slugs.len());
    for slug in &config.slugs {
        let path = config.data_dir.join(format!("{slug}.json"));
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(%slug, path = %path.display(), error = %e, "failed to read startup");
                continue;
            }
        };
        match Startup::from_json_str(&content) {
            Ok(startup) => startups.push(startup),
            Err(e) => {
                tracing::warn!(%slug, error = %e, "failed to parse startup");
            }
        }
    }

    tracing::debug!(
        loaded = startups.len(),
        configured = config.slugs.len(),
        "catalog loaded"
    );
    Ok(startups)
}

/// Stems of every `*.json` file in `data_dir`, sorted.
pub fn discover_slugs(data_dir: &Path) -> Result<Vec<String>, CatalogError> {
    if !data_dir.is_dir() {
        return Err(CatalogError::DataDirMissing(data_dir.to_path_buf()));
    }

    let mut slugs = Vec::new();
    for entry in std::fs::read_dir(data_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            slugs.push(stem.to_string());
        }
    }
    slugs.sort();
    Ok(slugs)
}

/// Configured slugs in order, followed by any discovered on disk that the
/// configuration does not list.
pub fn all_slugs(config: &CatalogConfig) -> Result<Vec<String>, CatalogError> {
    let mut slugs = config.slugs.clone();
    for found in discover_slugs(&config.data_dir)? {
        if !slugs.contains(&found) {
            tracing::debug!(slug = %found, "record file not in configured slugs");
            slugs.push(found);
        }
    }
    Ok(slugs)
}
