//! # Supported Languages
//!
//! The directory is published in English, Portuguese and Spanish. Every
//! required localized field must carry all three.

use serde::{Deserialize, Serialize};

use crate::error::OpenStartupError;

/// A supported content language.
///
/// [`Language::En`] is the default and the fallback for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Portuguese.
    Pt,
    /// Spanish.
    Es,
}

/// Languages every required localized field must provide, in report order.
pub const REQUIRED_LANGUAGES: [Language; 3] = [Language::En, Language::Pt, Language::Es];

impl Language {
    /// The two-letter code used as the key in localized fields.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
        }
    }

    /// The language's name in that language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
            Self::Es => "Español",
        }
    }

    /// Parse a language code, case-insensitive and tolerant of region
    /// tags (`pt-BR`, `es_MX`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = OpenStartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OpenStartupError::UnsupportedLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
