//! # openstartup-query — Catalog Queries
//!
//! Pure functions over an in-memory slice of [`Startup`] records. Nothing
//! here touches the filesystem, and no input record is ever modified:
//! every operation returns a new `Vec` of references into the caller's
//! slice.
//!
//! ## Operations
//!
//! - [`filter_startups`]: search term and category predicates, AND-ed.
//! - [`sort_startups`]: stable sort by name, founding year, category or
//!   last update, in either direction.
//! - [`unique_categories`]: the sorted set of category labels for one
//!   language.
//! - [`related_startups`]: scoring by shared category and tags.
//! - [`query_startups`]: filter, then sort, as the catalog grid does.
//!
//! Search and category matching span every language of a field; sort and
//! relatedness keys use the English values only.
//!
//! [`Startup`]: openstartup_core::Startup

pub mod collection;
pub mod facets;
pub mod filter;
pub mod related;
pub mod sort;

pub use collection::{find_startup, query_startups, startups_from_value};
pub use facets::unique_categories;
pub use filter::{filter_startups, FilterSpec, ALL_CATEGORIES};
pub use related::{related_startups, relevance_score, Related, DEFAULT_RELATED_LIMIT};
pub use sort::{sort_startups, SortBy, SortOrder};
