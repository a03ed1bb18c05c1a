// Engagement scorer — account age bands with an escalation for prolific
// new accounts that barely engage.
//
// The escalation modifies the engagement score in place; it is an
// aggravating factor, not a separate category.

use crate::models::{round_score, CategoryResult};
use crate::scoring::signals::ProfileSignals;

/// Recent comments above this count make a new account "prolific".
const PROLIFIC_POSTING_FREQUENCY: usize = 5;
/// Karma ratio below this counts as very low engagement.
const LOW_ENGAGEMENT_RATIO: f64 = 0.05;
const ESCALATION_MULTIPLIER: f64 = 1.5;

/// Score engagement from the normalized profile signals.
pub fn score_engagement(signals: &ProfileSignals) -> CategoryResult {
    let (score, description) = match signals.account_age_years {
        None => (50, "Account age not provided."),
        Some(age) if age < 1.0 => (
            60,
            "Account is very new; low engagement is common in new users.",
        ),
        Some(age) if age < 3.0 => (
            40,
            "Account is moderately new; engagement appears acceptable.",
        ),
        Some(_) => (
            20,
            "Account is well-established; engagement is as expected.",
        ),
    };

    if is_prolific_low_engagement(signals) {
        let escalated = round_score(f64::from(score) * ESCALATION_MULTIPLIER);
        return CategoryResult::new(
            escalated,
            format!(
                "{description} Additionally, frequent posts with very low engagement were detected."
            ),
        );
    }

    CategoryResult::new(score, description)
}

/// New account, more than five recent comments, and a karma ratio under 0.05.
/// An uncomputable karma ratio never escalates.
pub fn is_prolific_low_engagement(signals: &ProfileSignals) -> bool {
    signals.is_new_account()
        && signals.posting_frequency > PROLIFIC_POSTING_FREQUENCY
        && signals
            .karma_ratio
            .is_some_and(|ratio| ratio < LOW_ENGAGEMENT_RATIO)
}
