//! Integration test: the repository's own `openstartup.yaml` loads, and
//! every slug it lists resolves to a record on disk.

use std::path::PathBuf;

use openstartup_catalog::{
    all_slugs, discover_slugs, load_catalog, CatalogConfig, CONFIG_FILE_NAME, DEFAULT_SLUGS,
};

fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn repository_config() -> CatalogConfig {
    let root = repo_root();
    CatalogConfig::from_file(&root.join(CONFIG_FILE_NAME))
        .unwrap()
        .resolved_against(&root)
}

#[test]
fn repository_config_matches_defaults() {
    let cfg = repository_config();
    let defaults = CatalogConfig::default().resolved_against(&repo_root());
    assert_eq!(cfg, defaults);
}

#[test]
fn every_configured_slug_loads() {
    let cfg = repository_config();
    let catalog = load_catalog(&cfg).unwrap();
    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, DEFAULT_SLUGS);
}

#[test]
fn no_unlisted_record_files() {
    let cfg = repository_config();
    let mut on_disk = discover_slugs(&cfg.data_dir).unwrap();
    let mut listed = all_slugs(&cfg).unwrap();
    on_disk.sort();
    listed.sort();
    assert_eq!(on_disk, listed);
}
