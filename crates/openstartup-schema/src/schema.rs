//! # Strict Schema Conformance
//!
//! The rule validator checks content; this module checks *types*. It
//! compiles a JSON Schema (Draft 2020-12) describing what each field of a
//! record may hold, e.g. that `tags.<lang>` is an array of strings or that
//! `metrics.users` is a string or number, and reports every place a record
//! departs from it.
//!
//! The schema shipped in `schemas/startup.schema.json` is embedded at
//! compile time; a different schema can be supplied from disk.

use std::fmt;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// The schema shipped with the repository.
pub const EMBEDDED_SCHEMA: &str = include_str!("../../../schemas/startup.schema.json");

/// Error preparing a schema for use.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("schema load error for '{path}': {reason}")]
    Load {
        /// Path of the schema file.
        path: String,
        /// Reason the file could not be read or parsed.
        reason: String,
    },

    /// The schema is not valid JSON Schema.
    #[error("validator build error: {0}")]
    Build(String),
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the record.
    pub instance_path: String,
    /// JSON Pointer within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "Schema violation at (root): {}", self.message)
        } else {
            write!(f, "Schema violation at {}: {}", self.instance_path, self.message)
        }
    }
}

/// A compiled record schema.
pub struct StartupSchema {
    validator: Validator,
}

impl fmt::Debug for StartupSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartupSchema").finish_non_exhaustive()
    }
}

impl StartupSchema {
    /// Compile the embedded schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] only if the embedded file is malformed.
    pub fn embedded() -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(EMBEDDED_SCHEMA).map_err(|e| SchemaError::Load {
            path: "schemas/startup.schema.json (embedded)".to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;
        Self::from_value(&value)
    }

    /// Load and compile a schema file.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Load {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| SchemaError::Load {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;
        Self::from_value(&value)
    }

    /// Compile an already-parsed schema.
    pub fn from_value(schema: &Value) -> Result<Self, SchemaError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(schema)
            .map_err(|e| SchemaError::Build(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Every violation in `record`, in the order the validator reports them.
    pub fn violations(&self, record: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(record)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// True if `record` conforms.
    pub fn is_valid(&self, record: &Value) -> bool {
        self.validator.is_valid(record)
    }
}
