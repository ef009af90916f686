//! Presentation helpers for the catalog views: long-form dates and
//! abbreviated traction numbers.

use chrono::{DateTime, Datelike, Utc};

use crate::coerce::parse_leading_float;
use crate::language::Language;
use crate::temporal::parse_lenient;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Long-form date in `lang`, rendered in UTC.
///
/// Empty input renders as `""`; input that is not a recognizable date is
/// returned unchanged.
pub fn format_date(value: &str, lang: Language) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_lenient(value) {
        Some(dt) => long_date(&dt, lang),
        None => value.to_string(),
    }
}

fn long_date(dt: &DateTime<Utc>, lang: Language) -> String {
    let month = dt.month0() as usize;
    let (day, year) = (dt.day(), dt.year());
    match lang {
        Language::En => format!("{} {day}, {year}", MONTHS_EN[month]),
        Language::Pt => format!("{day} de {} de {year}", MONTHS_PT[month]),
        Language::Es => format!("{day} de {} de {year}", MONTHS_ES[month]),
    }
}

/// Abbreviate a traction figure: `"5 million"` → `"5M"`, `"50 thousand"`
/// → `"50K"`, `"2 billion"` → `"2B"`.
///
/// The numeric part is read from the digits and dots of the input. Input
/// without a number, or without a magnitude marker, is returned unchanged.
/// Markers are checked in the order M, K, B.
pub fn format_number(value: &str) -> String {
    let numeric: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let Some(n) = parse_leading_float(&numeric) else {
        return value.to_string();
    };

    if value.contains('M') || value.contains("million") {
        format!("{n}M")
    } else if value.contains('K') || value.contains("thousand") {
        format!("{n}K")
    } else if value.contains('B') || value.contains("billion") {
        format!("{n}B")
    } else {
        value.to_string()
    }
}
