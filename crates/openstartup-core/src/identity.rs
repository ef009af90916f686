//! # Startup Identifiers
//!
//! A startup id doubles as its record's filename stem and its detail-page
//! slug, so it must be safe in both places: lowercase ASCII alphanumeric
//! segments joined by single hyphens.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::OpenStartupError;

/// The slug shape every startup id must match.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

fn slug_regex() -> Option<&'static Regex> {
    static SLUG: OnceLock<Option<Regex>> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(SLUG_PATTERN).ok()).as_ref()
}

/// Returns true if `s` matches [`SLUG_PATTERN`].
///
/// Rejects uppercase letters, underscores, leading/trailing hyphens and
/// doubled hyphens.
pub fn is_valid_slug(s: &str) -> bool {
    slug_regex().is_some_and(|re| re.is_match(s))
}

/// A validated startup identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartupId(String);

impl StartupId {
    /// Parse a slug, rejecting anything outside [`SLUG_PATTERN`].
    pub fn parse(s: &str) -> Result<Self, OpenStartupError> {
        if is_valid_slug(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(OpenStartupError::InvalidId(s.to_string()))
        }
    }

    /// Access the slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The record filename for this id (`<id>.json`).
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl TryFrom<String> for StartupId {
    type Error = OpenStartupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StartupId> for String {
    fn from(id: StartupId) -> Self {
        id.0
    }
}

impl std::str::FromStr for StartupId {
    type Err = OpenStartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StartupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slugs() {
        for ok in ["a", "acme-ai", "web3", "x-1-y", "2024-edition"] {
            assert!(is_valid_slug(ok), "{ok} should be a valid slug");
        }
    }

    #[test]
    fn rejects_non_slugs() {
        for bad in ["", "Acme", "acme_ai", "-acme", "acme-", "acme--ai", "acme ai", "açme"] {
            assert!(!is_valid_slug(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_and_display() {
        let id = StartupId::parse("fintech-pro").unwrap();
        assert_eq!(id.as_str(), "fintech-pro");
        assert_eq!(id.to_string(), "fintech-pro");
        assert_eq!(id.file_name(), "fintech-pro.json");
    }

    #[test]
    fn parse_rejects_uppercase() {
        let err = StartupId::parse("FinTech").unwrap_err();
        assert!(matches!(err, OpenStartupError::InvalidId(ref s) if s == "FinTech"));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let id: StartupId = serde_json::from_str("\"acme-ai\"").unwrap();
        assert_eq!(id.as_str(), "acme-ai");
        assert!(serde_json::from_str::<StartupId>("\"Acme_AI\"").is_err());
    }
}
