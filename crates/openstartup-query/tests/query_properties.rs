//! Property tests for the catalog query operations.
//!
//! Catalogs are generated from small alphabets so that search hits,
//! category collisions and equal sort keys all occur often.

use std::collections::HashSet;

use openstartup_core::{Language, Startup};
use openstartup_query::{
    filter_startups, related_startups, sort_startups, unique_categories, FilterSpec, SortBy,
    SortOrder,
};
use proptest::prelude::*;
use serde_json::json;

const CATEGORIES: [&str; 4] = ["Technology", "Finance", "Health", "technology"];
const TAGS: [&str; 5] = ["AI", "SaaS", "Cloud", "Data", "Mobile"];

fn startup_strategy() -> impl Strategy<Value = (String, Option<usize>, Vec<usize>, i64, i64)> {
    (
        "[a-dA-D ]{0,6}",
        prop::option::of(0..CATEGORIES.len()),
        prop::collection::vec(0..TAGS.len(), 0..4),
        1990i64..2030,
        0i64..4,
    )
}

fn build(index: usize, parts: (String, Option<usize>, Vec<usize>, i64, i64)) -> Startup {
    let (name, category, tags, founded, month) = parts;
    let tags: Vec<&str> = tags.into_iter().map(|t| TAGS[t]).collect();
    let mut value = json!({
        "id": format!("s{index}"),
        "name": {"en": name.clone(), "pt": format!("{name} pt")},
        "description": {"en": "desc"},
        "tags": {"en": tags},
        "founded": founded.to_string(),
        "lastUpdated": format!("2024-0{}-01T00:00:00.000Z", month + 1),
    });
    if let Some(c) = category {
        value["category"] = json!({"en": CATEGORIES[c]});
    }
    Startup::from_value(value).unwrap()
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Startup>> {
    prop::collection::vec(startup_strategy(), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, p)| build(i, p))
            .collect()
    })
}

fn sort_by_strategy() -> impl Strategy<Value = SortBy> {
    prop::sample::select(SortBy::ALL.to_vec())
}

fn ids(records: &[&Startup]) -> Vec<String> {
    records.iter().map(|s| s.id.clone()).collect()
}

proptest! {
    /// Filtering returns a subsequence of its input.
    #[test]
    fn filter_is_ordered_subset(
        records in catalog_strategy(),
        search in "[a-d]{0,2}",
        category in prop::sample::select(vec!["", "all", "technology", "Finance", "Retail"])
    ) {
        let spec = FilterSpec::new().search(search).category(category);
        let found = filter_startups(&records, &spec);
        let mut remaining = records.iter();
        for hit in &found {
            prop_assert!(remaining.any(|r| std::ptr::eq(r, *hit)));
        }
    }

    /// Filtering twice with the same spec changes nothing.
    #[test]
    fn filter_is_idempotent(records in catalog_strategy(), search in "[a-d ]{0,2}") {
        let spec = FilterSpec::new().search(search);
        let once = filter_startups(&records, &spec);
        let twice = filter_startups(once.iter().copied(), &spec);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// Sorting is a permutation of the input.
    #[test]
    fn sort_is_permutation(
        records in catalog_strategy(),
        by in sort_by_strategy(),
        desc in any::<bool>()
    ) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        let sorted = sort_startups(&records, Some(by), order);
        let mut before: Vec<String> = records.iter().map(|s| s.id.clone()).collect();
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Equal keys keep their input order, in both directions.
    #[test]
    fn sort_is_stable(records in catalog_strategy(), desc in any::<bool>()) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        let sorted = sort_startups(&records, Some(SortBy::Category), order);
        let position = |id: &str| records.iter().position(|s| s.id == id);
        for pair in sorted.windows(2) {
            let key = |s: &Startup| s.english_category().unwrap_or("").to_lowercase();
            if key(pair[0]) == key(pair[1]) {
                prop_assert!(position(pair[0].id.as_str()) < position(pair[1].id.as_str()));
            }
        }
    }

    /// With distinct keys, descending is ascending reversed.
    #[test]
    fn desc_reverses_asc_for_distinct_keys(
        years in prop::collection::btree_set(1900i64..2100, 0..10)
    ) {
        let records: Vec<Startup> = years
            .iter()
            .rev()
            .enumerate()
            .map(|(i, y)| {
                Startup::from_value(json!({"id": format!("s{i}"), "founded": y})).unwrap()
            })
            .collect();
        let asc = ids(&sort_startups(&records, Some(SortBy::Founded), SortOrder::Asc));
        let mut desc = ids(&sort_startups(&records, Some(SortBy::Founded), SortOrder::Desc));
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    /// Facets are sorted, distinct, non-empty, and drawn from the records.
    #[test]
    fn categories_are_sorted_and_unique(records in catalog_strategy()) {
        let categories = unique_categories(&records, Language::En);
        prop_assert!(categories.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(categories.iter().all(|c| !c.is_empty()));
        let present: HashSet<&str> = records.iter().filter_map(|s| s.english_category()).collect();
        prop_assert!(categories.iter().all(|c| present.contains(c.as_str())));
    }

    /// Related results exclude the target, respect the limit, score above
    /// zero and come best first.
    #[test]
    fn related_is_ranked_and_bounded(
        records in catalog_strategy(),
        pick in any::<prop::sample::Index>(),
        limit in 0usize..5
    ) {
        prop_assume!(!records.is_empty());
        let target = &records[pick.index(records.len())];
        let related = related_startups(&records, target, limit);
        prop_assert!(related.len() <= limit);
        prop_assert!(related.iter().all(|r| r.startup.id != target.id && r.score > 0));
        prop_assert!(related.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
