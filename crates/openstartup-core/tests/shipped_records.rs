//! Integration test: the records in `public/data/startups/` map onto the
//! typed model without loss of the fields the site displays.

use std::path::PathBuf;

use openstartup_core::{Language, Startup, StartupId, REQUIRED_LANGUAGES};

fn data_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir.join("public").join("data").join("startups")
}

fn shipped() -> Vec<(String, Startup)> {
    let mut records = Vec::new();
    for entry in std::fs::read_dir(data_dir()).unwrap().flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = std::fs::read_to_string(&path).unwrap();
            let startup = Startup::from_json_str(&content)
                .unwrap_or_else(|e| panic!("{} does not parse: {e}", path.display()));
            records.push((stem, startup));
        }
    }
    records.sort_by(|a, b| a.0.cmp(&b.0));
    records
}

#[test]
fn ids_are_slugs_matching_file_names() {
    let records = shipped();
    assert!(!records.is_empty());
    for (stem, startup) in &records {
        let id: StartupId = startup.id.parse().unwrap();
        assert_eq!(id.as_str(), stem);
        assert_eq!(id.file_name(), format!("{stem}.json"));
    }
}

#[test]
fn every_language_has_display_text() {
    for (stem, startup) in shipped() {
        for lang in REQUIRED_LANGUAGES {
            assert!(startup.name.text(lang).is_some(), "{stem}: no name in {lang}");
            assert!(
                startup.short_description.text(lang).is_some(),
                "{stem}: no short description in {lang}"
            );
        }
    }
}

#[test]
fn founded_years_and_english_keys_are_present() {
    for (stem, startup) in shipped() {
        assert!(startup.founded_year().is_some(), "{stem}: founded");
        assert!(startup.english_category().is_some(), "{stem}: category");
        assert!(!startup.english_tags().is_empty(), "{stem}: tags");
        assert!(!startup.tags.tags(Language::Es).is_empty(), "{stem}: es tags");
    }
}

#[test]
fn typed_round_trip_preserves_the_record() {
    for (stem, startup) in shipped() {
        let json = serde_json::to_string(&startup).unwrap();
        let back = Startup::from_json_str(&json).unwrap();
        assert_eq!(back, startup, "{stem}");
    }
}
