// Unit tests for scoring and output functions.
//
// Tests isolated pure functions: band boundaries for each category scorer,
// the normalizer's date contract, LikelihoodTier::from_score boundaries,
// and truncate_chars UTF-8 safety.

use botscope::models::{Comment, LikelihoodTier};
use botscope::output::truncate_chars;
use botscope::scoring::additional::{
    duplicate_ratio, score_additional_checks, score_duplicates, score_karma_discrepancy,
};
use botscope::scoring::aggregate::{weighted_average, OverrideTrigger};
use botscope::scoring::content::score_content;
use botscope::scoring::engagement::{is_prolific_low_engagement, score_engagement};
use botscope::scoring::metadata::score_metadata;
use botscope::scoring::signals::{parse_account_date, ProfileSignals};

fn signals(age: Option<f64>, frequency: usize, ratio: Option<f64>) -> ProfileSignals {
    ProfileSignals {
        account_age_years: age,
        posting_frequency: frequency,
        karma_ratio: ratio,
    }
}

fn comments_of_len(len: usize, count: usize) -> Vec<Comment> {
    // distinct texts of equal length
    (0..count)
        .map(|i| {
            let mut text = format!("{i:03}");
            text.push_str(&"x".repeat(len.saturating_sub(3)));
            Comment::new(text)
        })
        .collect()
}

// ============================================================
// Engagement — age band boundaries
// ============================================================

#[test]
fn engagement_just_below_one_year() {
    assert_eq!(score_engagement(&signals(Some(0.999), 0, None)).score, 60);
}

#[test]
fn engagement_exactly_one_year() {
    assert_eq!(score_engagement(&signals(Some(1.0), 0, None)).score, 40);
}

#[test]
fn engagement_just_below_three_years() {
    assert_eq!(score_engagement(&signals(Some(2.999), 0, None)).score, 40);
}

#[test]
fn engagement_exactly_three_years() {
    assert_eq!(score_engagement(&signals(Some(3.0), 0, None)).score, 20);
}

#[test]
fn engagement_negative_age_is_new() {
    assert_eq!(score_engagement(&signals(Some(-0.5), 0, None)).score, 60);
}

#[test]
fn escalation_ratio_boundary_is_exclusive() {
    assert!(is_prolific_low_engagement(&signals(Some(0.5), 6, Some(0.049))));
    assert!(!is_prolific_low_engagement(&signals(Some(0.5), 6, Some(0.05))));
}

#[test]
fn escalation_never_applies_to_unknown_age() {
    assert!(!is_prolific_low_engagement(&signals(None, 50, Some(0.0))));
}

// ============================================================
// Content — average length boundaries
// ============================================================

#[test]
fn content_just_below_short_threshold() {
    assert_eq!(score_content(&comments_of_len(14, 3)).score, 70);
}

#[test]
fn content_exactly_short_threshold() {
    assert_eq!(score_content(&comments_of_len(15, 3)).score, 40);
}

#[test]
fn content_just_below_detailed_threshold() {
    assert_eq!(score_content(&comments_of_len(39, 3)).score, 40);
}

#[test]
fn content_exactly_detailed_threshold() {
    assert_eq!(score_content(&comments_of_len(40, 3)).score, 20);
}

// ============================================================
// Metadata — description boundaries
// ============================================================

#[test]
fn metadata_nine_chars_is_brief() {
    let result = score_metadata(Some("123456789"), &signals(Some(5.0), 0, None));
    assert_eq!(result.score, 50);
    assert_eq!(result.description, "Profile description is very brief.");
}

#[test]
fn metadata_ten_chars_is_normal() {
    let result = score_metadata(Some("1234567890"), &signals(Some(5.0), 0, None));
    assert_eq!(result.score, 20);
}

#[test]
fn metadata_blank_depends_on_age() {
    let blank = Some("\t\n ");
    assert_eq!(score_metadata(blank, &signals(Some(0.1), 0, None)).score, 60);
    assert_eq!(score_metadata(blank, &signals(Some(1.0), 0, None)).score, 50);
    assert_eq!(score_metadata(blank, &signals(None, 0, None)).score, 50);
}

// ============================================================
// Additional checks — sub-signal boundaries
// ============================================================

#[test]
fn duplicate_ratio_exactly_point_three_is_some_repetition() {
    // 3 repeats of "a" beyond the first across 10 comments = 0.3
    let mut list: Vec<Comment> = (0..4).map(|_| Comment::new("a")).collect();
    list.extend((0..6).map(|i| Comment::new(format!("unique {i}"))));
    assert_eq!(duplicate_ratio(&list), Some(0.3));
    assert_eq!(score_duplicates(&list).score, 50);
}

#[test]
fn duplicate_all_identical_is_extreme() {
    let list: Vec<Comment> = (0..5).map(|_| Comment::new("gm")).collect();
    // 4 / 5
    assert_eq!(duplicate_ratio(&list), Some(0.8));
    assert_eq!(score_duplicates(&list).score, 100);
}

#[test]
fn karma_just_below_extreme_threshold() {
    assert_eq!(score_karma_discrepancy(Some(0.0099)).score, 100);
}

#[test]
fn karma_just_below_low_threshold() {
    assert_eq!(score_karma_discrepancy(Some(0.0499)).score, 80);
}

#[test]
fn additional_checks_rounds_half_up() {
    // duplicate 50 (no comments) + karma 20 -> 35
    let checks = score_additional_checks(&[], Some(1.0));
    assert_eq!(checks.combined.score, 35);
    // duplicate 50 + karma 100 -> 75, and the karma sub-signal is extreme
    let checks = score_additional_checks(&[], Some(0.0));
    assert_eq!(checks.combined.score, 75);
    assert!(checks.karma_is_extreme());
    assert_eq!(
        OverrideTrigger::from_checks(&checks),
        Some(OverrideTrigger::Karma)
    );
}

#[test]
fn no_trigger_without_extreme_sub_signal() {
    let checks = score_additional_checks(&[], None);
    assert_eq!(OverrideTrigger::from_checks(&checks), None);
}

// ============================================================
// weighted_average
// ============================================================

#[test]
fn weighted_average_rounds_to_nearest() {
    // (70 + 50 + 50 + 50 * 1.5) / 4.5 = 54.44
    assert_eq!(
        weighted_average(&[(70, 1.0), (50, 1.0), (50, 1.0), (50, 1.5)]),
        54
    );
    // (61 + 60) / 2 = 60.5
    assert_eq!(weighted_average(&[(61, 1.0), (60, 1.0)]), 61);
}

// ============================================================
// parse_account_date — accepted formats
// ============================================================

#[test]
fn date_formats_accepted() {
    assert!(parse_account_date("2023-01-01").is_some());
    assert!(parse_account_date("2023-01-01T00:00:00Z").is_some());
    assert!(parse_account_date("2023-01-01T00:00:00.250Z").is_some());
    assert!(parse_account_date("2023-01-01 10:00:00").is_some());
}

#[test]
fn date_formats_rejected() {
    assert!(parse_account_date("01/02/2023").is_none());
    assert!(parse_account_date("Jan 1, 2023").is_none());
    assert!(parse_account_date("Joined 2 years ago").is_none());
    assert!(parse_account_date("   ").is_none());
}

// ============================================================
// LikelihoodTier::from_score — boundary conditions
// ============================================================

#[test]
fn tier_boundaries() {
    let cases = [
        (0, LikelihoodTier::Unlikely),
        (25, LikelihoodTier::Unlikely),
        (26, LikelihoodTier::Possible),
        (50, LikelihoodTier::Possible),
        (51, LikelihoodTier::Likely),
        (75, LikelihoodTier::Likely),
        (76, LikelihoodTier::VeryLikely),
        (100, LikelihoodTier::VeryLikely),
    ];
    for (score, expected) in cases {
        assert_eq!(
            LikelihoodTier::from_score(score),
            expected,
            "Score {score} should map to {expected}"
        );
    }
}

#[test]
fn tier_display_matches_as_str() {
    for tier in [
        LikelihoodTier::Unlikely,
        LikelihoodTier::Possible,
        LikelihoodTier::Likely,
        LikelihoodTier::VeryLikely,
    ] {
        assert_eq!(tier.to_string(), tier.as_str());
    }
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("hello", 10), "hello");
}

#[test]
fn truncate_one_over_limit() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_emoji_safe() {
    let text = "Hello 🌍!";
    assert_eq!(truncate_chars(text, 7), "Hello 🌍...");
}

#[test]
fn truncate_cjk_characters() {
    assert_eq!(truncate_chars("日本語テスト", 3), "日本語...");
}
