//! # Record File Validation
//!
//! Reads `<data_dir>/<slug>.json` and runs the rule validator on it.
//! Every failure, including a missing file or broken JSON, comes back as
//! a [`ValidationReport`] of the usual shape, so callers have one thing to
//! print and one exit-code rule to apply.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::report::ValidationReport;
use crate::schema::StartupSchema;
use crate::validate::Validator;

/// Path of the record file for `slug` inside `data_dir`.
pub fn record_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(format!("{slug}.json"))
}

/// Validates record files, optionally adding the strict schema check.
#[derive(Debug, Default)]
pub struct FileValidator {
    rules: Validator,
    schema: Option<StartupSchema>,
}

impl FileValidator {
    /// A file validator using `rules` only.
    pub fn new(rules: Validator) -> Self {
        Self { rules, schema: None }
    }

    /// Also report schema violations as errors.
    pub fn with_schema(mut self, schema: StartupSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Whether the strict schema check is enabled.
    pub fn is_strict(&self) -> bool {
        self.schema.is_some()
    }

    /// Validate the record file for `slug`.
    pub fn validate_file(&self, data_dir: &Path, slug: &str) -> ValidationReport {
        let path = record_path(data_dir, slug);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return ValidationReport::fatal(format!("File not found: {}", path.display()));
            }
            Err(e) => {
                return ValidationReport::fatal(format!("Error reading file: {e}"));
            }
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "record is not valid JSON");
                return ValidationReport::fatal(format!("Invalid JSON syntax: {e}"));
            }
        };

        self.validate_value(&value, slug)
    }

    /// Validate an already-parsed record.
    ///
    /// Schema violations are appended after the rule errors. Records that
    /// fail the structural check get no schema findings.
    pub fn validate_value(&self, value: &Value, slug: &str) -> ValidationReport {
        let mut report = self.rules.validate(value, slug);

        if let Some(schema) = &self.schema {
            if value.is_object() {
                report.extend_errors(schema.violations(value).iter().map(ToString::to_string));
            }
        }

        report
    }
}

/// Validate the record file for `slug` with the default rules.
pub fn validate_startup_file(data_dir: &Path, slug: &str) -> ValidationReport {
    FileValidator::default().validate_file(data_dir, slug)
}
