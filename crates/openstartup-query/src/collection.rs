//! # Collections
//!
//! Entry points that work on a whole catalog: turning a JSON array into
//! records, running a full [`FilterSpec`] query, and id lookup.

use openstartup_core::Startup;
use serde_json::Value;

use crate::filter::{filter_startups, FilterSpec};
use crate::sort::sort_startups;

/// Records from a JSON array.
///
/// Anything other than an array yields an empty catalog. Elements that are
/// not objects are skipped with a warning.
pub fn startups_from_value(value: &Value) -> Vec<Startup> {
    let Some(items) = value.as_array() else {
        tracing::warn!("catalog input is not an array; treating it as empty");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match Startup::from_value(item.clone()) {
            Ok(startup) => Some(startup),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog entry");
                None
            }
        })
        .collect()
}

/// Filter then, if `spec.sort_by` is set, sort.
pub fn query_startups<'a>(records: &'a [Startup], spec: &FilterSpec) -> Vec<&'a Startup> {
    let filtered = filter_startups(records, spec);
    sort_startups(filtered, spec.sort_by, spec.sort_order)
}

/// The first record whose id is `id`.
pub fn find_startup<'a>(records: &'a [Startup], id: &str) -> Option<&'a Startup> {
    records.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortBy, SortOrder};
    use serde_json::json;

    fn catalog() -> Vec<Startup> {
        startups_from_value(&json!([
            {"id": "zeta", "name": {"en": "Zeta"}, "category": {"en": "AI"}},
            {"id": "alpha", "name": {"en": "Alpha"}, "category": {"en": "AI"}},
            {"id": "mid", "name": {"en": "Mid"}, "category": {"en": "Retail"}},
        ]))
    }

    #[test]
    fn non_array_is_empty() {
        assert!(startups_from_value(&json!({"id": "x"})).is_empty());
        assert!(startups_from_value(&json!(null)).is_empty());
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let records = startups_from_value(&json!([
            {"id": "ok"},
            {"id": "mistyped", "name": "not localized", "founded": true},
            42,
            ["array"],
        ]));
        let ids: Vec<&str> = records.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ok", "mistyped"]);
    }

    #[test]
    fn query_filters_then_sorts() {
        let records = catalog();
        let spec = FilterSpec::new()
            .category("ai")
            .sorted(SortBy::Name, SortOrder::Asc);
        let ids: Vec<&str> = query_startups(&records, &spec)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["alpha", "zeta"]);
    }

    #[test]
    fn query_without_sort_keeps_order() {
        let records = catalog();
        let ids: Vec<&str> = query_startups(&records, &FilterSpec::new())
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn find_by_id() {
        let records = catalog();
        assert_eq!(find_startup(&records, "mid").map(|s| s.english_name()), Some("Mid"));
        assert!(find_startup(&records, "MID").is_none());
        assert!(find_startup(&records, "").is_none());
    }
}
