//! # Startup Record Model
//!
//! The typed form of one `<id>.json` record file.
//!
//! Every field is optional and deserialized through [`crate::lenient`]:
//! values of the wrong JSON type read as absent instead of failing the
//! whole record. A record that breaks validation rules (null translations,
//! numeric URLs, odd dates) still loads; the validator is advisory and the
//! query engine never rejects a record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::parse_leading_int;
use crate::error::OpenStartupError;
use crate::language::Language;
use crate::lenient;
use crate::localized::Localized;

/// A display value authored either as text or as a bare JSON number
/// (`"founded": 2021` and `"founded": "2021"` are both common).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON string.
    Text(String),
}

impl TextOrNumber {
    /// Read a display value from JSON. Booleans become text; `null`,
    /// arrays and objects are `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            Value::Bool(b) => Some(Self::Text(b.to_string())),
            _ => None,
        }
    }

    /// The leading integer of the value, if any.
    pub fn leading_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64().or_else(|| parse_leading_int(&n.to_string())),
            Self::Text(s) => parse_leading_int(s),
        }
    }
}

impl std::fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub twitter: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
}

/// Contact details. Only `email` has a format rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
}

/// Headline traction numbers, display-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub users: Option<TextOrNumber>,
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub revenue: Option<TextOrNumber>,
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub growth: Option<TextOrNumber>,
}

/// One startup profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    /// Slug; expected to equal the record's filename stem. Non-string
    /// scalars are kept in their JSON text form.
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub name: Localized<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub description: Localized<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub short_description: Localized<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub category: Localized<String>,
    #[serde(default, deserialize_with = "lenient::tag_lists")]
    pub tags: Localized<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_media: Option<SocialMedia>,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<Contact>,
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub founded: Option<TextOrNumber>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub employees: Option<TextOrNumber>,
    #[serde(
        default,
        deserialize_with = "lenient::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub funding: Option<TextOrNumber>,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub metrics: Option<Metrics>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<String>,
}

impl Startup {
    /// Parse a record from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, OpenStartupError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Map an already-parsed JSON value onto the record model.
    ///
    /// Fails only if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, OpenStartupError> {
        if !value.is_object() {
            return Err(OpenStartupError::Serialization(serde::de::Error::custom(
                "startup record must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The English name exactly as authored, `""` if absent.
    pub fn english_name(&self) -> &str {
        self.name.get_lang(Language::En).map_or("", String::as_str)
    }

    /// The English category exactly as authored.
    pub fn english_category(&self) -> Option<&str> {
        self.category.get_lang(Language::En).map(String::as_str)
    }

    /// The English tag list, empty if absent.
    pub fn english_tags(&self) -> &[String] {
        self.tags
            .get_lang(Language::En)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Founding year as the leading integer of `founded`.
    pub fn founded_year(&self) -> Option<i64> {
        self.founded.as_ref().and_then(TextOrNumber::leading_int)
    }
}
