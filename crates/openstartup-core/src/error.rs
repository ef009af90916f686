//! # Error Types
//!
//! Errors raised while constructing core types from untrusted input.
//! Data-shape problems inside a startup record are *not* errors here:
//! the validator reports those as strings in a `ValidationReport`.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum OpenStartupError {
    /// A startup identifier did not match the slug shape.
    #[error("invalid startup id {0:?}: use lowercase letters, numbers, and single hyphens")]
    InvalidId(String),

    /// A timestamp could not be parsed or is not in canonical form.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A language code outside the supported set.
    #[error("unsupported language {0:?}: expected one of en, pt, es")]
    UnsupportedLanguage(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
