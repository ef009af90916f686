//! # Validate Subcommand
//!
//! Checks `<data_dir>/<slug>.json` before it is submitted. With `--all`,
//! checks every configured slug plus any record file on disk the
//! configuration does not list.
//!
//! `--strict` adds the JSON Schema type check on top of the content rules.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use openstartup_catalog::{all_slugs, CatalogConfig};
use openstartup_schema::{FileValidator, StartupSchema, ValidationReport, Validator};

use crate::OutputFormat;

const RULE: &str = "──────────────────────────────────────────────────";

/// Arguments for the `openstartup validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Slug of the record to validate (the file name without `.json`).
    #[arg(value_name = "SLUG", conflicts_with = "all")]
    pub slug: Option<String>,

    /// Validate every record in the data directory.
    #[arg(long)]
    pub all: bool,

    /// Also check value types against the record schema.
    #[arg(long)]
    pub strict: bool,

    /// Schema file for `--strict` instead of the built-in one.
    #[arg(long, value_name = "PATH", requires = "strict")]
    pub schema: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SlugReport<'a> {
    slug: &'a str,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every record is valid, 1 if any is invalid or
/// no slug was given.
pub fn run_validate(args: &ValidateArgs, config: &CatalogConfig, repo_root: &Path) -> Result<u8> {
    let slugs = match (&args.slug, args.all) {
        (Some(slug), _) => vec![slug.clone()],
        (None, true) => all_slugs(config).context("failed to list record files")?,
        (None, false) => {
            println!("Usage: openstartup validate <startup-slug>");
            println!("       openstartup validate --all [--strict]");
            println!("Example: openstartup validate acme-ai");
            return Ok(1);
        }
    };

    let validator = build_validator(args, repo_root)?;
    tracing::info!(
        count = slugs.len(),
        strict = validator.is_strict(),
        data_dir = %config.data_dir.display(),
        "validating records"
    );

    let reports: Vec<(String, ValidationReport)> = slugs
        .into_iter()
        .map(|slug| {
            let report = validator.validate_file(&config.data_dir, &slug);
            (slug, report)
        })
        .collect();
    let failed = reports.iter().filter(|(_, r)| !r.is_valid).count();

    match args.format {
        OutputFormat::Json => print_json_reports(&reports, args.all)?,
        OutputFormat::Text if args.all => print_summary(&reports, failed),
        OutputFormat::Text => {
            for (slug, report) in &reports {
                print!("{}", render_report(slug, report));
            }
        }
    }

    Ok(if failed > 0 { 1 } else { 0 })
}

fn build_validator(args: &ValidateArgs, repo_root: &Path) -> Result<FileValidator> {
    let validator = FileValidator::new(Validator::new());
    if !args.strict {
        return Ok(validator);
    }
    let schema = match &args.schema {
        Some(path) => {
            let resolved = crate::resolve_path(path, repo_root);
            StartupSchema::from_path(&resolved)
                .with_context(|| format!("failed to load schema {}", resolved.display()))?
        }
        None => StartupSchema::embedded().context("failed to load built-in record schema")?,
    };
    Ok(validator.with_schema(schema))
}

/// The contributor-facing report for one record.
pub fn render_report(slug: &str, report: &ValidationReport) -> String {
    let mut out = format!("Validating startup: {slug}\n{RULE}\n");

    if report.is_valid {
        out.push_str("PASS: validation passed, the record is valid.\n");
        push_bullets(&mut out, "Warnings", &report.warnings);
        out.push_str("\nThe startup is ready to be added to the directory.\n");
    } else {
        out.push_str("FAIL: validation failed, fix the following errors:\n\n");
        for error in &report.errors {
            out.push_str(&format!("   • {error}\n"));
        }
        push_bullets(&mut out, "Warnings", &report.warnings);
        out.push_str("\nFor the record format, see docs/STARTUP_TEMPLATE.md.\n");
    }
    out
}

fn push_bullets(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading}:\n"));
    for item in items {
        out.push_str(&format!("   • {item}\n"));
    }
}

fn print_summary(reports: &[(String, ValidationReport)], failed: usize) {
    for (slug, report) in reports {
        if report.is_valid {
            println!("  OK: {slug} ({} warning(s))", report.warnings.len());
        } else {
            println!("  FAIL: {slug} ({} error(s))", report.errors.len());
            for error in &report.errors {
                println!("      • {error}");
            }
        }
    }
    let total = reports.len();
    println!("Startups: {}/{total} passed", total - failed);
    if failed > 0 {
        println!("\n{failed} startup(s) failed validation out of {total} total.");
    }
}

fn print_json_reports(reports: &[(String, ValidationReport)], as_list: bool) -> Result<()> {
    let entries: Vec<SlugReport<'_>> = reports
        .iter()
        .map(|(slug, report)| SlugReport { slug, report })
        .collect();
    match entries.as_slice() {
        [single] if !as_list => crate::print_json(single),
        _ => crate::print_json(&entries),
    }
}
