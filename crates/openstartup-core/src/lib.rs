//! # openstartup-core — Foundational Types for the OpenStartup Directory
//!
//! Every other crate in the workspace depends on `openstartup-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed records.** A startup profile is a [`Startup`], not a loose
//!    JSON tree. Optional display fields are `Option`s, so a missing path
//!    is `None` rather than a silently propagated hole. Any record that
//!    parses as a JSON object loads; [`lenient`] reads mistyped fields as
//!    absent.
//!
//! 2. **Explicit localization.** Multilingual text lives in
//!    [`Localized<T>`]. Lookups go through [`localized()`], which states
//!    its English fallback policy instead of relying on dynamic indexing.
//!
//! 3. **One slug rule.** [`identity::is_valid_slug`] is the single
//!    definition of the `^[a-z0-9]+(-[a-z0-9]+)*$` identifier shape, shared
//!    by [`StartupId`] and the validator.
//!
//! 4. **One timestamp rule.** [`temporal`] owns the canonical ISO-8601
//!    form (`YYYY-MM-DDTHH:MM:SS.sssZ`) that `lastUpdated` must round-trip
//!    through, and the lenient parse used for sorting.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `openstartup-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod coerce;
pub mod display;
pub mod error;
pub mod identity;
pub mod language;
pub mod lenient;
pub mod localized;
pub mod startup;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use display::{format_date, format_number};
pub use error::OpenStartupError;
pub use identity::{is_valid_slug, StartupId};
pub use language::{Language, REQUIRED_LANGUAGES};
pub use localized::{localized, Localized};
pub use startup::{Contact, Metrics, SocialMedia, Startup, TextOrNumber};
