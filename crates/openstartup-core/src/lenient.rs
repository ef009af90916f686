//! # Lenient Field Deserializers
//!
//! `deserialize_with` helpers for [`Startup`](crate::Startup). Each reads
//! the field as a raw JSON value and keeps only what fits the typed model.
//! Anything else is treated as absent. None of them fails on a value that
//! parsed as JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::localized::Localized;
use crate::startup::TextOrNumber;

/// A scalar rendered as text: strings as-is, numbers and booleans in their
/// JSON form. `null`, arrays and objects become `""`.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// A string, or `None` for any other JSON type.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A string or a number; booleans are kept as text.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<TextOrNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TextOrNumber::from_value(Value::deserialize(deserializer)?))
}

/// A nested object, or `None` if the value is not one or does not map
/// onto `T`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Language-to-text map. Entries whose value is not a string are dropped;
/// a non-object field is an empty map.
pub fn texts<'de, D>(deserializer: D) -> Result<Localized<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(Localized::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(code, value)| match value {
            Value::String(s) => Some((code, s)),
            _ => None,
        })
        .collect())
}

/// Language-to-tag-list map. Non-string tags are dropped, as are entries
/// whose value is not an array.
pub fn tag_lists<'de, D>(deserializer: D) -> Result<Localized<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(Localized::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(code, value)| match value {
            Value::Array(items) => {
                let tags = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                Some((code, tags))
            }
            _ => None,
        })
        .collect())
}
