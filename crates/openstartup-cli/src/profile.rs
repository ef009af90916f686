//! # Show Subcommand
//!
//! Renders one startup profile the way its page lays it out: header,
//! description, key figures, contact links, tags and the update date.

use anyhow::Result;
use clap::Args;

use openstartup_catalog::CatalogConfig;
use openstartup_core::{format_date, format_number, Language, Localized, Startup};
use openstartup_query::find_startup;

use crate::browse::load;
use crate::OutputFormat;

/// Shown when a record has no logo of its own.
pub const DEFAULT_LOGO: &str = "/images/default-logo.svg";

/// Arguments for `openstartup show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Slug of the startup.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Display language.
    #[arg(long, default_value = "en")]
    pub lang: Language,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Execute `openstartup show`.
pub fn run_show(args: &ShowArgs, config: &CatalogConfig) -> Result<u8> {
    let catalog = load(config)?;
    let Some(startup) = find_startup(&catalog, &args.slug) else {
        println!("Startup not found: {}", args.slug);
        return Ok(1);
    };

    match args.format {
        OutputFormat::Json => crate::print_json(startup)?,
        OutputFormat::Text => print!("{}", render_profile(startup, config, args.lang)),
    }
    Ok(0)
}

/// The full text profile for `startup` in `lang`.
pub fn render_profile(startup: &Startup, config: &CatalogConfig, lang: Language) -> String {
    let text = |field: &Localized<String>| field.text(lang).unwrap_or("").to_string();
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", text(&startup.name), startup.id));
    if let Some(category) = startup.category.text(lang) {
        out.push_str(&format!("{category}\n"));
    }
    let logo = startup.logo.as_deref().filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LOGO);
    out.push_str(&format!("Logo: {}\n", config.asset_path(logo)));
    if let Some(website) = startup.website.as_deref().filter(|w| !w.is_empty()) {
        out.push_str(&format!("Website: {website}\n"));
    }

    let short = text(&startup.short_description);
    if !short.is_empty() {
        out.push_str(&format!("\n{short}\n"));
    }
    let description = text(&startup.description);
    if !description.is_empty() {
        out.push_str(&format!("\n{description}\n"));
    }

    let mut figures: Vec<(&str, String)> = Vec::new();
    if let Some(founded) = &startup.founded {
        figures.push(("Founded", founded.to_string()));
    }
    if let Some(location) = startup.location.as_deref().filter(|l| !l.is_empty()) {
        figures.push(("Location", location.to_string()));
    }
    if let Some(employees) = &startup.employees {
        figures.push(("Employees", employees.to_string()));
    }
    if let Some(funding) = &startup.funding {
        figures.push(("Funding", funding.to_string()));
    }
    if let Some(metrics) = &startup.metrics {
        if let Some(users) = &metrics.users {
            figures.push(("Users", format_number(&users.to_string())));
        }
        if let Some(revenue) = &metrics.revenue {
            figures.push(("Revenue", revenue.to_string()));
        }
        if let Some(growth) = &metrics.growth {
            figures.push(("Growth", growth.to_string()));
        }
    }
    push_section(&mut out, "Metrics", &figures);

    let mut contact: Vec<(&str, String)> = Vec::new();
    if let Some(c) = &startup.contact {
        if let Some(email) = c.email.as_deref().filter(|e| !e.is_empty()) {
            contact.push(("Email", email.to_string()));
        }
        if let Some(phone) = c.phone.as_deref().filter(|p| !p.is_empty()) {
            contact.push(("Phone", phone.to_string()));
        }
    }
    if let Some(social) = &startup.social_media {
        if let Some(twitter) = social.twitter.as_deref().filter(|t| !t.is_empty()) {
            let handle = twitter.rsplit('/').next().unwrap_or(twitter);
            contact.push(("Twitter", format!("@{handle}")));
        }
        if let Some(linkedin) = social.linkedin.as_deref().filter(|l| !l.is_empty()) {
            contact.push(("LinkedIn", linkedin.to_string()));
        }
        if let Some(github) = social.github.as_deref().filter(|g| !g.is_empty()) {
            contact.push(("GitHub", github.to_string()));
        }
    }
    push_section(&mut out, "Contact", &contact);

    let tags = startup.tags.tags(lang);
    if !tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", tags.join(", ")));
    }

    if let Some(updated) = startup.last_updated.as_deref().filter(|u| !u.is_empty()) {
        out.push_str(&format!("\nLast updated: {}\n", format_date(updated, lang)));
    }
    out
}

fn push_section(out: &mut String, heading: &str, rows: &[(&str, String)]) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading}:\n"));
    for (label, value) in rows {
        out.push_str(&format!("  {:<10} {value}\n", format!("{label}:")));
    }
}
