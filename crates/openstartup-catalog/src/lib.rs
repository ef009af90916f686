//! # openstartup-catalog — Configuration and Loading
//!
//! Turns a repository checkout into an in-memory catalog.
//!
//! - [`CatalogConfig`] says where records live, which slugs make up the
//!   catalog, and how asset URLs are formed in development and
//!   production.
//! - [`load_catalog`] reads each configured slug's record. A record that
//!   cannot be read or parsed is logged and left out; the rest still load.
//! - [`discover_slugs`] lists what is actually on disk, so `validate --all`
//!   also sees files nobody added to the slug list.
//!
//! ## Crate Policy
//!
//! - Depends only on `openstartup-core` internally.
//! - The only crate besides the CLI that reads configuration or the
//!   environment.

pub mod config;
pub mod error;
pub mod loader;

pub use config::{CatalogConfig, Mode, CONFIG_FILE_NAME, DEFAULT_SLUGS};
pub use error::CatalogError;
pub use loader::{all_slugs, discover_slugs, load_catalog};
