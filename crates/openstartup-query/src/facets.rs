//! Category facets for the filter dropdown.

use std::collections::BTreeSet;

use openstartup_core::{Language, Startup};

/// Distinct non-empty category values in `lang`, sorted ascending.
///
/// Comparison is by code point and case-sensitive: `"AI"` and `"ai"` are
/// two entries. Records without a `lang` category contribute nothing;
/// there is no English fallback here.
pub fn unique_categories<'a, I>(records: I, lang: Language) -> Vec<String>
where
    I: IntoIterator<Item = &'a Startup>,
{
    records
        .into_iter()
        .filter_map(|s| s.category.get_lang(lang))
        .filter(|c| !c.is_empty())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_category(category: serde_json::Value) -> Startup {
        Startup::from_value(json!({"id": "x", "category": category})).unwrap()
    }

    #[test]
    fn deduplicates_and_sorts() {
        let records = vec![
            with_category(json!({"en": "Technology", "pt": "Tecnologia"})),
            with_category(json!({"en": "Finance", "pt": "Finanças"})),
            with_category(json!({"en": "Technology", "pt": "Tecnologia"})),
        ];
        assert_eq!(unique_categories(&records, Language::En), ["Finance", "Technology"]);
        assert_eq!(unique_categories(&records, Language::Pt), ["Finanças", "Tecnologia"]);
    }

    #[test]
    fn skips_missing_and_empty() {
        let records = vec![
            with_category(json!({"en": "Health"})),
            with_category(json!({"en": ""})),
            with_category(json!({})),
        ];
        assert_eq!(unique_categories(&records, Language::En), ["Health"]);
        assert!(unique_categories(&records, Language::Es).is_empty());
    }

    #[test]
    fn case_variants_are_distinct() {
        let records = vec![
            with_category(json!({"en": "ai"})),
            with_category(json!({"en": "AI"})),
        ];
        assert_eq!(unique_categories(&records, Language::En), ["AI", "ai"]);
    }
}
