// Content scorer — average length of recent comments.

use crate::models::{CategoryResult, Comment};

const SHORT_COMMENT_AVG: f64 = 15.0;
const DETAILED_COMMENT_AVG: f64 = 40.0;

/// Score comment content. No comments at all reads as a lurker, which is
/// mildly suspicious but has a plausible legitimate explanation.
pub fn score_content(comments: &[Comment]) -> CategoryResult {
    let Some(avg) = average_comment_length(comments) else {
        return CategoryResult::new(
            70,
            "No recent comments detected; the user might simply be a lurker.",
        );
    };

    if avg < SHORT_COMMENT_AVG {
        CategoryResult::new(
            70,
            "Recent comments are unusually short; this can sometimes indicate automation.",
        )
    } else if avg < DETAILED_COMMENT_AVG {
        CategoryResult::new(
            40,
            "Recent comments are within a typical range for casual users.",
        )
    } else {
        CategoryResult::new(20, "Recent comments appear detailed and natural.")
    }
}

/// Mean comment length in characters, with missing text counted as 0.
/// Returns None for an empty list.
pub fn average_comment_length(comments: &[Comment]) -> Option<f64> {
    if comments.is_empty() {
        return None;
    }
    let total: usize = comments
        .iter()
        .map(|c| c.text_or_empty().chars().count())
        .sum();
    Some(total as f64 / comments.len() as f64)
}
