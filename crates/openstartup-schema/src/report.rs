//! # Validation Report
//!
//! The outcome of validating one record. Errors block publication;
//! warnings are advice. Both keep the order in which checks ran, so the
//! same file always produces the same output.

use serde::{Deserialize, Serialize};

/// Result of validating one startup record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Blocking problems, in check order.
    pub errors: Vec<String>,
    /// Non-blocking advice, in check order.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Build a report from collected findings. Validity is derived from
    /// `errors` alone.
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A report for a structural failure that stops all field checks.
    pub fn fatal(error: impl Into<String>) -> Self {
        Self::from_findings(vec![error.into()], Vec::new())
    }

    /// Append further errors, keeping `is_valid` consistent.
    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = String>) {
        self.errors.extend(errors);
        self.is_valid = self.errors.is_empty();
    }
}
