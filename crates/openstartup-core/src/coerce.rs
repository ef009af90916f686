//! # Lenient Numeric Coercion
//!
//! Record files store years and amounts as free text (`"2021"`,
//! `"founded 2019"`, `"5 million"`). These helpers read the leading number
//! the way a browser's `parseInt`/`parseFloat` would, so sort keys and
//! warnings agree with what the published site shows.

/// Parse the leading base-10 integer of `s`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the
/// first non-digit. Returns `None` if no digit follows. Values beyond the
/// `i64` range saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the leading decimal number of `s` (`digits[.digits]`).
///
/// Returns `None` unless at least one digit is present in the prefix.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_basic() {
        assert_eq!(parse_leading_int("2021"), Some(2021));
        assert_eq!(parse_leading_int("  2019 (Brazil)"), Some(2019));
        assert_eq!(parse_leading_int("2020.9"), Some(2020));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn leading_int_rejects_non_numbers() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("circa 2019"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn leading_float() {
        assert_eq!(parse_leading_float("5"), Some(5.0));
        assert_eq!(parse_leading_float("2.5"), Some(2.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_float("..."), None);
        assert_eq!(parse_leading_float(""), None);
    }
}
