//! # Filtering
//!
//! A record is kept iff every active predicate matches. Both predicates
//! look across *all* languages of a field, so a Portuguese search term
//! finds a record even while the English view is selected.

use openstartup_core::{Localized, Startup};
use serde::{Deserialize, Deserializer, Serialize};

use crate::sort::{SortBy, SortOrder};

/// Category value that disables the category predicate.
pub const ALL_CATEGORIES: &str = "all";

/// Query parameters for the catalog grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Case-insensitive substring over name, description and short
    /// description. Empty matches everything.
    pub search: String,
    /// Case-insensitive exact category. Empty or `"all"` matches everything.
    pub category: String,
    /// Sort key; `None` keeps the filtered order.
    #[serde(deserialize_with = "lenient_sort_by")]
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl FilterSpec {
    /// A spec that matches everything and keeps input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort key and direction.
    pub fn sorted(mut self, by: SortBy, order: SortOrder) -> Self {
        self.sort_by = Some(by);
        self.sort_order = order;
        self
    }

    /// True if `startup` satisfies every active predicate.
    pub fn matches(&self, startup: &Startup) -> bool {
        self.matches_search(startup) && self.matches_category(startup)
    }

    fn matches_search(&self, startup: &Startup) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        let contains = |field: &Localized<String>| {
            field.values().any(|text| text.to_lowercase().contains(&term))
        };
        contains(&startup.name)
            || contains(&startup.description)
            || contains(&startup.short_description)
    }

    fn matches_category(&self, startup: &Startup) -> bool {
        if self.category.is_empty() || self.category == ALL_CATEGORIES {
            return true;
        }
        let wanted = self.category.to_lowercase();
        startup
            .category
            .values()
            .any(|category| category.to_lowercase() == wanted)
    }
}

/// Records satisfying `spec`'s predicates, in input order.
///
/// Sorting fields of `spec` are ignored here; see
/// [`query_startups`](crate::query_startups).
pub fn filter_startups<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a Startup>
where
    I: IntoIterator<Item = &'a Startup>,
{
    records.into_iter().filter(|s| spec.matches(s)).collect()
}

fn lenient_sort_by<'de, D>(deserializer: D) -> Result<Option<SortBy>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(SortBy::parse))
}
