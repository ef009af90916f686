//! # Browse Subcommands
//!
//! `list`, `categories` and `related`: the catalog grid, the category
//! dropdown and the "similar startups" panel, on the terminal.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use openstartup_catalog::{load_catalog, CatalogConfig};
use openstartup_core::{Language, Startup};
use openstartup_query::{
    find_startup, query_startups, related_startups, unique_categories, FilterSpec, SortBy,
    SortOrder, ALL_CATEGORIES, DEFAULT_RELATED_LIMIT,
};

use crate::OutputFormat;

/// Arguments for `openstartup list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text to look for in names and descriptions.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact category, in any language; `all` disables the filter.
    #[arg(long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// name, founded, category or lastUpdated. Unknown keys keep catalog
    /// order.
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<String>,

    /// asc or desc.
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Display language.
    #[arg(long, default_value = "en")]
    pub lang: Language,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl ListArgs {
    fn filter_spec(&self) -> FilterSpec {
        let sort_by = self.sort_by.as_deref().and_then(|key| {
            let parsed = SortBy::parse(key);
            if parsed.is_none() {
                tracing::warn!(key, "unknown sort key; keeping catalog order");
            }
            parsed
        });
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            sort_by,
            sort_order: SortOrder::parse(&self.order),
        }
    }
}

/// Arguments for `openstartup categories`.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Language of the category labels.
    #[arg(long, default_value = "en")]
    pub lang: Language,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for `openstartup related`.
#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Slug of the startup to find neighbours for.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
    pub limit: usize,

    /// Display language.
    #[arg(long, default_value = "en")]
    pub lang: Language,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Execute `openstartup list`.
pub fn run_list(args: &ListArgs, config: &CatalogConfig) -> Result<u8> {
    let catalog = load(config)?;
    let spec = args.filter_spec();
    let found = query_startups(&catalog, &spec);
    tracing::debug!(?spec, matched = found.len(), total = catalog.len(), "catalog query");

    match args.format {
        OutputFormat::Json => crate::print_json(&found)?,
        OutputFormat::Text => {
            for startup in &found {
                println!("{}", render_row(startup, args.lang));
            }
            println!("{} startup(s)", found.len());
        }
    }
    Ok(0)
}

/// Execute `openstartup categories`.
pub fn run_categories(args: &CategoriesArgs, config: &CatalogConfig) -> Result<u8> {
    let catalog = load(config)?;
    let categories = unique_categories(&catalog, args.lang);

    match args.format {
        OutputFormat::Json => crate::print_json(&categories)?,
        OutputFormat::Text => {
            for category in &categories {
                println!("{category}");
            }
        }
    }
    Ok(0)
}

#[derive(Serialize)]
struct RelatedEntry<'a> {
    id: &'a str,
    name: &'a str,
    score: u32,
}

/// Execute `openstartup related`.
pub fn run_related(args: &RelatedArgs, config: &CatalogConfig) -> Result<u8> {
    let catalog = load(config)?;
    let Some(target) = find_startup(&catalog, &args.slug) else {
        println!("Startup not found: {}", args.slug);
        return Ok(1);
    };

    let related = related_startups(&catalog, target, args.limit);
    match args.format {
        OutputFormat::Json => {
            let entries: Vec<RelatedEntry<'_>> = related
                .iter()
                .map(|r| RelatedEntry {
                    id: &r.startup.id,
                    name: r.startup.name.text(args.lang).unwrap_or(""),
                    score: r.score,
                })
                .collect();
            crate::print_json(&entries)?;
        }
        OutputFormat::Text => {
            if related.is_empty() {
                println!("No related startups for {}", args.slug);
            }
            for r in &related {
                println!("{:>3}  {}", r.score, render_row(r.startup, args.lang));
            }
        }
    }
    Ok(0)
}

pub(crate) fn load(config: &CatalogConfig) -> Result<Vec<Startup>> {
    load_catalog(config).context("failed to load the startup catalog")
}

/// One catalog line: id, name, category and founding year.
pub fn render_row(startup: &Startup, lang: Language) -> String {
    let name = startup.name.text(lang).unwrap_or("");
    let category = startup.category.text(lang).unwrap_or("-");
    let founded = startup
        .founded
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    format!("{:<24} {:<28} {:<16} {founded}", startup.id, name, category)
}
