//! Global search ranking
//!
//! Scores flat index records (complexes, districts, developers, streets)
//! against a free-text query and returns the top suggestions. A linear scan
//! is plenty at this index size; no inverted index, no external service.

use crate::filter::fold;
use domus_models::{SearchDomain, SearchIndexRecord};
use std::cmp::Reverse;

/// Substring-of-name matches score this much.
const SCORE_NAME_SUBSTRING: i32 = 10;
/// Exact name equality adds this on top of the substring score.
const SCORE_NAME_EXACT_BONUS: i32 = 20;
/// Suggestion dropdowns show at most this many rows.
const MAX_RESULTS: usize = 10;

/// A ranked suggestion with its presentation context.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult<'a> {
    pub record: &'a SearchIndexRecord,
    pub score: i32,
    /// Set for complexes and streets.
    pub district: Option<&'a str>,
    /// Set for complexes.
    pub developer: Option<&'a str>,
}

/// Rank `records` against `query`: top 10, descending score, ties in scan
/// order.
///
/// Queries shorter than two characters after trimming return nothing; one
/// letter matches half the index and helps nobody.
pub fn rank_records<'a>(
    records: &'a [SearchIndexRecord],
    query: &str,
) -> Vec<ScoredResult<'a>> {
    let needle = fold(query);
    if needle.chars().count() < 2 {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult<'a>> = records
        .iter()
        .filter_map(|record| score_record(record, &needle))
        .collect();

    // Stable by construction: equal scores keep scan order.
    results.sort_by_key(|r| Reverse(r.score));
    results.truncate(MAX_RESULTS);
    results
}

fn score_record<'a>(record: &'a SearchIndexRecord, needle: &str) -> Option<ScoredResult<'a>> {
    let name = fold(&record.name);

    let mut score = 0;
    if name.contains(needle) {
        score += SCORE_NAME_SUBSTRING;
        if name == needle {
            score += SCORE_NAME_EXACT_BONUS;
        }
    } else if !keyword_match(record, needle) {
        return None;
    }

    let (district, developer) = context_of(record);
    Some(ScoredResult {
        record,
        score,
        district,
        developer,
    })
}

fn keyword_match(record: &SearchIndexRecord, needle: &str) -> bool {
    record.keywords.iter().any(|kw| fold(kw).contains(needle))
}

fn context_of(record: &SearchIndexRecord) -> (Option<&str>, Option<&str>) {
    match record.kind {
        SearchDomain::ResidentialComplex => (
            record.district.as_deref(),
            record.developer.as_deref(),
        ),
        SearchDomain::Street => (record.district.as_deref(), None),
        SearchDomain::District | SearchDomain::Developer => (None, None),
    }
}
