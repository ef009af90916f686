//! # Record Validation Rules
//!
//! Checks one parsed record file against the directory's content rules.
//! Works on the raw `serde_json::Value` rather than a typed `Startup`,
//! because the point is to describe what is wrong with files that may not
//! fit the typed model at all.
//!
//! ## Rule Order
//!
//! All rules run; none short-circuits the others. Findings are reported in
//! this order:
//!
//! 1. structural check (not an object → single fatal error, stop)
//! 2. required fields and their `en`/`pt`/`es` translations
//! 3. tag count per language (warning)
//! 4. id equals the filename stem
//! 5. id is slug-shaped
//! 6. URLs (`website`, `socialMedia.*`) are absolute http/https
//! 7. `contact.email` shape
//! 8. `lastUpdated` is canonical ISO-8601
//! 9. `founded` is a plausible year (warning)
//! 10. recommended fields present (warning)
//!
//! ## Truthiness
//!
//! "Present" means truthy: JSON `null`, `false`, `0` and `""` count as
//! absent. Objects and arrays are always present, even when empty.

use std::sync::OnceLock;

use openstartup_core::coerce::parse_leading_int;
use openstartup_core::identity::is_valid_slug;
use openstartup_core::temporal::{current_year, is_canonical_iso8601};
use openstartup_core::REQUIRED_LANGUAGES;
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::report::ValidationReport;

/// Fields every record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "description", "shortDescription"];

/// Fields whose value is a language-code map.
pub const LOCALIZED_FIELDS: [&str; 5] =
    ["name", "description", "shortDescription", "category", "tags"];

/// Dotted paths of fields that must hold absolute http/https URLs.
pub const URL_FIELDS: [&str; 4] = [
    "website",
    "socialMedia.twitter",
    "socialMedia.linkedin",
    "socialMedia.github",
];

/// Fields whose absence produces a warning.
pub const RECOMMENDED_FIELDS: [&str; 4] = ["category", "website", "founded", "location"];

/// Tags per language above which a warning is raised.
pub const MAX_TAGS_PER_LANGUAGE: usize = 4;

/// Earliest plausible founding year.
pub const MIN_FOUNDED_YEAR: i64 = 1900;

/// How many years past the current one a founding year may lie.
pub const FOUNDED_YEAR_LOOKAHEAD: i64 = 5;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// The rule engine. Holds the only ambient input the rules need: the
/// current year, for the founded-year sanity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    current_year: i64,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator using the system clock's current year.
    pub fn new() -> Self {
        Self::with_current_year(i64::from(current_year()))
    }

    /// A validator with a pinned current year.
    pub fn with_current_year(current_year: i64) -> Self {
        Self { current_year }
    }

    /// The year used for the founded-year upper bound.
    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    /// Validate one record against all rules.
    ///
    /// `expected_id` is the record's filename stem.
    pub fn validate(&self, record: &Value, expected_id: &str) -> ValidationReport {
        if !is_structured(record) {
            return ValidationReport::fatal("Invalid JSON: Startup data must be an object");
        }

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        check_required_fields(record, &mut errors);
        check_tag_counts(record, &mut warnings);
        check_id(record, expected_id, &mut errors);
        check_urls(record, &mut errors);
        check_email(record, &mut errors);
        check_last_updated(record, &mut errors);
        self.check_founded(record, &mut warnings);
        check_recommended(record, &mut warnings);

        ValidationReport::from_findings(errors, warnings)
    }

    fn check_founded(&self, record: &Value, warnings: &mut Vec<String>) {
        let Some(founded) = field(record, "founded") else {
            return;
        };
        let max_year = self.current_year + FOUNDED_YEAR_LOOKAHEAD;
        let plausible = parse_leading_int(&js_string(founded))
            .is_some_and(|year| (MIN_FOUNDED_YEAR..=max_year).contains(&year));
        if !plausible {
            warnings.push(format!("Unusual founded year: {}", js_string(founded)));
        }
    }
}

/// Validate `record` with a [`Validator`] on the system clock.
pub fn validate_startup(record: &Value, expected_id: &str) -> ValidationReport {
    Validator::new().validate(record, expected_id)
}

fn check_required_fields(record: &Value, errors: &mut Vec<String>) {
    for name in REQUIRED_FIELDS {
        let Some(value) = field(record, name) else {
            errors.push(format!("Missing required field: {name}"));
            continue;
        };

        if !LOCALIZED_FIELDS.contains(&name) {
            continue;
        }
        if !is_structured(value) {
            errors.push(format!("Field '{name}' must be an object with language keys"));
            continue;
        }
        for lang in REQUIRED_LANGUAGES {
            if field(value, lang.code()).is_none() {
                errors.push(format!("Missing {} translation for field: {name}", lang.code()));
            }
        }
    }
}

fn check_tag_counts(record: &Value, warnings: &mut Vec<String>) {
    let Some(tags) = field(record, "tags") else {
        return;
    };
    for lang in REQUIRED_LANGUAGES {
        if let Some(Value::Array(list)) = field(tags, lang.code()) {
            if list.len() > MAX_TAGS_PER_LANGUAGE {
                warnings.push(format!(
                    "Too many tags for {} (max {MAX_TAGS_PER_LANGUAGE}): {}",
                    lang.code(),
                    list.len()
                ));
            }
        }
    }
}

fn check_id(record: &Value, expected_id: &str, errors: &mut Vec<String>) {
    let Some(id) = field(record, "id") else {
        return;
    };
    let shown = js_string(id);

    if id.as_str() != Some(expected_id) {
        errors.push(format!("ID '{shown}' does not match filename '{expected_id}'"));
    }
    if !is_valid_slug(&shown) {
        errors.push(format!(
            "Invalid ID format: '{shown}'. Use lowercase letters, numbers, and hyphens only"
        ));
    }
}

fn check_urls(record: &Value, errors: &mut Vec<String>) {
    for path in URL_FIELDS {
        let Some(value) = lookup_path(record, path).filter(|v| is_truthy(v)) else {
            continue;
        };
        let shown = js_string(value);
        if !is_valid_url(&shown) {
            errors.push(format!("Invalid URL for {path}: {shown}"));
        }
    }
}

fn check_email(record: &Value, errors: &mut Vec<String>) {
    let Some(email) = lookup_path(record, "contact.email").filter(|v| is_truthy(v)) else {
        return;
    };
    let shown = js_string(email);
    if !is_valid_email(&shown) {
        errors.push(format!("Invalid email format: {shown}"));
    }
}

fn check_last_updated(record: &Value, errors: &mut Vec<String>) {
    let Some(value) = field(record, "lastUpdated") else {
        return;
    };
    let canonical = value.as_str().is_some_and(is_canonical_iso8601);
    if !canonical {
        errors.push(format!(
            "Invalid date format for lastUpdated: {}. Use ISO 8601 format",
            js_string(value)
        ));
    }
}

fn check_recommended(record: &Value, warnings: &mut Vec<String>) {
    for name in RECOMMENDED_FIELDS {
        if field(record, name).is_none() {
            warnings.push(format!("Missing recommended field: {name}"));
        }
    }
}

/// True if `url` parses as an absolute URL with an `http` or `https` scheme.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// True if `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Resolve a dotted path (`socialMedia.twitter`) inside a JSON value.
///
/// Returns `None` as soon as a segment is missing or a non-object is
/// traversed.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Objects and arrays can be indexed by key; everything else cannot.
fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// A truthy direct member of an object; `None` for anything else.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key).filter(|v| is_truthy(v))
}

/// How a value reads when interpolated into a message.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
