//! # Relatedness
//!
//! Ranks other records against a target by shared English category and
//! English tags. Scores:
//!
//! - `+10` when the English categories are equal. Two records that both
//!   lack an English category count as equal.
//! - `+2` for every candidate tag that also appears in the target's tags.
//!   A tag repeated in the candidate's list counts each time.
//!
//! Candidates scoring zero are dropped. The rest are ordered by score,
//! descending, ties in input order.

use openstartup_core::Startup;
use serde::Serialize;

/// Default number of related records returned.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Score for an equal English category.
pub const CATEGORY_MATCH_SCORE: u32 = 10;

/// Score per shared English tag.
pub const SHARED_TAG_SCORE: u32 = 2;

/// A candidate together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Related<'a> {
    pub startup: &'a Startup,
    pub score: u32,
}

/// Relatedness of `candidate` to `target`.
pub fn relevance_score(candidate: &Startup, target: &Startup) -> u32 {
    let mut score = 0;
    if candidate.english_category() == target.english_category() {
        score += CATEGORY_MATCH_SCORE;
    }
    let target_tags = target.english_tags();
    for tag in candidate.english_tags() {
        if target_tags.contains(tag) {
            score += SHARED_TAG_SCORE;
        }
    }
    score
}

/// Up to `limit` records related to `target`, best first.
///
/// `target` itself is excluded by id, so a copy of the target that sits in
/// `records` is never returned.
pub fn related_startups<'a, I>(records: I, target: &Startup, limit: usize) -> Vec<Related<'a>>
where
    I: IntoIterator<Item = &'a Startup>,
{
    let mut ranked: Vec<Related<'a>> = records
        .into_iter()
        .filter(|s| s.id != target.id)
        .map(|s| Related {
            startup: s,
            score: relevance_score(s, target),
        })
        .filter(|r| r.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn startup(id: &str, category: Option<&str>, tags: &[&str]) -> Startup {
        let mut value = json!({"id": id, "name": {"en": id}, "tags": {"en": tags}});
        if let Some(category) = category {
            value["category"] = json!({"en": category});
        }
        Startup::from_value(value).unwrap()
    }

    #[test]
    fn category_outweighs_tags() {
        let a = startup("A", Some("Technology"), &["AI", "SaaS"]);
        let b = startup("B", Some("Technology"), &["Cloud"]);
        let c = startup("C", Some("Finance"), &["AI"]);
        let records = vec![a.clone(), b, c];

        let related = related_startups(&records, &a, DEFAULT_RELATED_LIMIT);
        let ids: Vec<&str> = related.iter().map(|r| r.startup.id.as_str()).collect();
        let scores: Vec<u32> = related.iter().map(|r| r.score).collect();
        assert_eq!(ids, ["B", "C"]);
        assert_eq!(scores, [10, 2]);
    }

    #[test]
    fn category_and_tags_add_up() {
        let target = startup("T", Some("Health"), &["AI", "Care"]);
        let candidate = startup("X", Some("Health"), &["AI", "Care", "Data"]);
        assert_eq!(relevance_score(&candidate, &target), 14);
    }

    #[test]
    fn shared_tags_only() {
        let target = startup("T", Some("Health"), &["AI", "Care"]);
        let candidate = startup("X", Some("Retail"), &["Care", "AI"]);
        assert_eq!(relevance_score(&candidate, &target), 4);
    }

    #[test]
    fn repeated_candidate_tags_count_each_time() {
        let target = startup("T", Some("Health"), &["AI"]);
        let candidate = startup("X", Some("Retail"), &["AI", "AI"]);
        assert_eq!(relevance_score(&candidate, &target), 4);
    }

    #[test]
    fn missing_categories_on_both_sides_match() {
        let target = startup("T", None, &[]);
        let candidate = startup("X", None, &[]);
        assert_eq!(relevance_score(&candidate, &target), CATEGORY_MATCH_SCORE);
    }

    #[test]
    fn unrelated_records_are_dropped() {
        let target = startup("T", Some("Health"), &["AI"]);
        let records = vec![target.clone(), startup("X", Some("Retail"), &["Shoes"])];
        assert!(related_startups(&records, &target, DEFAULT_RELATED_LIMIT).is_empty());
    }

    #[test]
    fn limit_and_tie_order() {
        let target = startup("T", Some("Health"), &[]);
        let records: Vec<Startup> = ["P", "Q", "R", "S"]
            .into_iter()
            .map(|id| startup(id, Some("Health"), &[]))
            .collect();
        let related = related_startups(&records, &target, 2);
        let ids: Vec<&str> = related.iter().map(|r| r.startup.id.as_str()).collect();
        assert_eq!(ids, ["P", "Q"]);
        assert!(related_startups(&records, &target, 0).is_empty());
    }

    #[test]
    fn empty_catalog_has_no_related() {
        let target = startup("T", Some("Health"), &["AI"]);
        let records: Vec<Startup> = Vec::new();
        assert!(related_startups(&records, &target, DEFAULT_RELATED_LIMIT).is_empty());
    }
}
