//! # openstartup-schema — Record Validation
//!
//! Checks startup record files before they are published.
//!
//! ## Rule Validation (`validate`)
//!
//! [`Validator::validate`] applies the directory's content rules to one
//! parsed record and its filename-derived id: required fields and their
//! `en`/`pt`/`es` translations, id/filename consistency and slug shape,
//! URL, email and timestamp formats, plus advisory checks on tag counts,
//! founding year and recommended fields. Problems are collected, never
//! thrown.
//!
//! ## File Validation (`file`)
//!
//! [`FileValidator`] reads `<data_dir>/<slug>.json` and folds I/O and JSON
//! syntax failures into the same [`ValidationReport`] shape.
//!
//! ## Strict Mode (`schema`)
//!
//! [`StartupSchema`] compiles `schemas/startup.schema.json` with the
//! `jsonschema` crate and reports value-type violations. It is opt-in and
//! its findings are appended after the rule errors.
//!
//! ## Crate Policy
//!
//! - Depends only on `openstartup-core` internally.
//! - Never panics on record content; every data problem is a report entry.

pub mod file;
pub mod report;
pub mod schema;
pub mod validate;

pub use file::{record_path, validate_startup_file, FileValidator};
pub use report::ValidationReport;
pub use schema::{SchemaError, StartupSchema, Violation};
pub use validate::{validate_startup, Validator};
