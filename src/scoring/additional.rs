// Additional checks — duplicate comment ratio and karma discrepancy.
//
// Two independent sub-signals, averaged into one category score. The raw
// sub-scores are kept alongside the blend because the aggregator's override
// reads them before averaging.

use std::collections::HashMap;

use crate::models::{round_score, CategoryResult, Comment};

/// Sub-score that marks a signal as extreme. Either sub-signal reaching it
/// triggers the aggregate override.
pub const EXTREME_SUB_SCORE: u8 = 100;

const HIGH_REPETITION_RATIO: f64 = 0.3;
const SOME_REPETITION_RATIO: f64 = 0.1;
const EXTREME_KARMA_RATIO: f64 = 0.01;
const LOW_KARMA_RATIO: f64 = 0.05;

/// Both sub-signals plus their blended category result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalChecks {
    pub duplicate: CategoryResult,
    pub karma: CategoryResult,
    pub combined: CategoryResult,
}

impl AdditionalChecks {
    pub fn duplicate_is_extreme(&self) -> bool {
        self.duplicate.score == EXTREME_SUB_SCORE
    }

    pub fn karma_is_extreme(&self) -> bool {
        self.karma.score == EXTREME_SUB_SCORE
    }
}

/// Run both checks and blend them with a simple average.
pub fn score_additional_checks(
    comments: &[Comment],
    karma_ratio: Option<f64>,
) -> AdditionalChecks {
    let duplicate = score_duplicates(comments);
    let karma = score_karma_discrepancy(karma_ratio);

    let combined = CategoryResult::new(
        round_score((f64::from(duplicate.score) + f64::from(karma.score)) / 2.0),
        format!("{} {}", duplicate.description, karma.description),
    );

    AdditionalChecks {
        duplicate,
        karma,
        combined,
    }
}

/// Fraction of comments that repeat an earlier comment's exact text.
///
/// Sums (occurrences - 1) over each distinct text and divides by the total
/// count. Missing text is grouped with the empty string. None for an empty list.
pub fn duplicate_ratio(comments: &[Comment]) -> Option<f64> {
    if comments.is_empty() {
        return None;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for comment in comments {
        *counts.entry(comment.text_or_empty()).or_default() += 1;
    }

    let duplicates: usize = counts.values().map(|count| count - 1).sum();
    Some(duplicates as f64 / comments.len() as f64)
}

/// Score repetition across recent comments.
pub fn score_duplicates(comments: &[Comment]) -> CategoryResult {
    match duplicate_ratio(comments) {
        None => CategoryResult::new(50, "Insufficient comment data for duplicate analysis."),
        Some(ratio) if ratio > HIGH_REPETITION_RATIO => CategoryResult::new(
            EXTREME_SUB_SCORE,
            "High repetition detected in recent comments.",
        ),
        Some(ratio) if ratio > SOME_REPETITION_RATIO => {
            CategoryResult::new(50, "Some repetition observed in recent comments.")
        }
        Some(_) => CategoryResult::new(20, "Recent comments are sufficiently varied."),
    }
}

/// Score comment karma relative to post karma.
pub fn score_karma_discrepancy(karma_ratio: Option<f64>) -> CategoryResult {
    match karma_ratio {
        None => CategoryResult::new(50, "Insufficient karma data for analysis."),
        Some(ratio) if ratio < EXTREME_KARMA_RATIO => CategoryResult::new(
            EXTREME_SUB_SCORE,
            "Extremely low comment karma relative to post karma.",
        ),
        Some(ratio) if ratio < LOW_KARMA_RATIO => {
            CategoryResult::new(80, "Low comment karma relative to post karma.")
        }
        Some(_) => CategoryResult::new(20, "Karma distribution appears typical."),
    }
}
