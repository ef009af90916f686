//! # Sorting
//!
//! Stable ordering by one of four keys. Records with equal keys keep
//! their relative input order in both directions.
//!
//! | Key           | Compared as                                        |
//! |---------------|----------------------------------------------------|
//! | `name`        | English name, lowercased                           |
//! | `founded`     | leading integer of `founded`, 0 if none            |
//! | `category`    | English category, lowercased, `""` if absent       |
//! | `lastUpdated` | epoch milliseconds, 0 if missing or unparseable    |

use std::cmp::Ordering;
use std::fmt;

use openstartup_core::temporal::sort_millis;
use openstartup_core::Startup;
use serde::{Deserialize, Deserializer, Serialize};

/// Field to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Name,
    Founded,
    Category,
    LastUpdated,
}

impl SortBy {
    /// All keys, in display order.
    pub const ALL: [SortBy; 4] = [
        SortBy::Name,
        SortBy::Founded,
        SortBy::Category,
        SortBy::LastUpdated,
    ];

    /// The wire name (`"name"`, `"founded"`, `"category"`, `"lastUpdated"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Founded => "founded",
            SortBy::Category => "category",
            SortBy::LastUpdated => "lastUpdated",
        }
    }

    /// Parse a wire name. Unknown keys yield `None`, which callers treat as
    /// "leave the order alone".
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }

    fn key(self, startup: &Startup) -> SortKey {
        match self {
            SortBy::Name => SortKey::Text(startup.english_name().to_lowercase()),
            SortBy::Founded => SortKey::Number(startup.founded_year().unwrap_or(0)),
            SortBy::Category => {
                SortKey::Text(startup.english_category().unwrap_or("").to_lowercase())
            }
            SortBy::LastUpdated => SortKey::Number(sort_millis(startup.last_updated.as_deref())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"desc"` selects descending; anything else is ascending.
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SortOrder::parse(&raw))
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Number(i64),
}

/// Sort `records` by `sort_by` in `order`.
///
/// `None` returns the records in input order. Keys are computed once per
/// record.
pub fn sort_startups<'a, I>(
    records: I,
    sort_by: Option<SortBy>,
    order: SortOrder,
) -> Vec<&'a Startup>
where
    I: IntoIterator<Item = &'a Startup>,
{
    let Some(sort_by) = sort_by else {
        return records.into_iter().collect();
    };

    let mut keyed: Vec<(SortKey, &'a Startup)> = records
        .into_iter()
        .map(|s| (sort_by.key(s), s))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| order.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, s)| s).collect()
}
