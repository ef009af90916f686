//! Integration test: records that fail validation but parse as JSON objects
//! stay in the catalog and are reachable through queries.

use openstartup_catalog::{load_catalog, CatalogConfig};
use openstartup_core::Language;
use openstartup_query::{filter_startups, find_startup, unique_categories, FilterSpec};
use serde_json::json;

fn write_catalog(records: &[(&str, serde_json::Value)]) -> (tempfile::TempDir, CatalogConfig) {
    let dir = tempfile::tempdir().unwrap();
    for (slug, record) in records {
        std::fs::write(dir.path().join(format!("{slug}.json")), record.to_string()).unwrap();
    }
    let config = CatalogConfig {
        data_dir: dir.path().to_path_buf(),
        slugs: records.iter().map(|(slug, _)| slug.to_string()).collect(),
        ..CatalogConfig::default()
    };
    (dir, config)
}

#[test]
fn parseable_invalid_records_are_loaded_and_queryable() {
    let (_dir, config) = write_catalog(&[
        (
            "null-translation",
            json!({
                "id": "null-translation",
                "name": {"en": "Atlas Ledger", "pt": null, "es": "Atlas Ledger"},
                "category": {"en": "Finance"}
            }),
        ),
        (
            "bool-founded",
            json!({"id": "bool-founded", "name": {"en": "Beacon"}, "founded": true}),
        ),
        (
            "numeric-website",
            json!({"id": "numeric-website", "name": {"en": "Cinder"}, "website": 42}),
        ),
        (
            "null-tag",
            json!({
                "id": "null-tag",
                "name": {"en": "Delta"},
                "category": {"en": "Finance"},
                "tags": {"en": ["AI", null]}
            }),
        ),
        ("7", json!({"id": 7, "name": {"en": "Seven Ledger"}})),
    ]);

    let catalog = load_catalog(&config).unwrap();
    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["null-translation", "bool-founded", "numeric-website", "null-tag", "7"]
    );

    let ledgers: Vec<&str> = filter_startups(&catalog, &FilterSpec::new().search("ledger"))
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ledgers, ["null-translation", "7"]);

    let finance: Vec<&str> = filter_startups(&catalog, &FilterSpec::new().category("finance"))
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(finance, ["null-translation", "null-tag"]);

    assert_eq!(unique_categories(&catalog, Language::En), ["Finance"]);
    let tagged = find_startup(&catalog, "null-tag").unwrap();
    assert_eq!(tagged.english_tags(), ["AI"]);
    assert_eq!(find_startup(&catalog, "numeric-website").unwrap().website, None);
}
