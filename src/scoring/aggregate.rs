// Aggregator — weighted blend of the four categories, plus the hard override.
//
// bot_likelihood = round(sum(score_i * weight_i) / sum(weight_i))
//
// The override reads the raw duplicate and karma sub-scores, not the
// averaged additional-checks score. If either sub-signal is extreme the
// weighted blend is discarded and the likelihood is forced to 100.

use chrono::{DateTime, Utc};

use crate::models::{
    round_score, AnalysisResult, CategoryBreakdown, ProfileInput, STATUS_COMPLETE,
};
use crate::scoring::additional::{self, AdditionalChecks};
use crate::scoring::content;
use crate::scoring::engagement;
use crate::scoring::metadata;
use crate::scoring::signals::ProfileSignals;

/// Category weights for the final blend.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    pub content: f64,
    pub engagement: f64,
    pub metadata: f64,
    /// Metadata weight for accounts under one year old (default 0.5).
    /// Sparse metadata on a new account says less.
    pub new_account_metadata: f64,
    /// Additional checks aggregate two red-flag signals (default 1.5)
    pub additional_checks: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            content: 1.0,
            engagement: 1.0,
            metadata: 1.0,
            new_account_metadata: 0.5,
            additional_checks: 1.5,
        }
    }
}

impl CategoryWeights {
    /// The metadata weight to use for the given signals.
    pub fn metadata_weight(&self, signals: &ProfileSignals) -> f64 {
        if signals.is_new_account() {
            self.new_account_metadata
        } else {
            self.metadata
        }
    }
}

/// Which sub-signals forced the override, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideTrigger {
    Duplicate,
    Karma,
    Both,
}

impl OverrideTrigger {
    pub fn from_checks(checks: &AdditionalChecks) -> Option<Self> {
        match (checks.duplicate_is_extreme(), checks.karma_is_extreme()) {
            (true, true) => Some(OverrideTrigger::Both),
            (true, false) => Some(OverrideTrigger::Duplicate),
            (false, true) => Some(OverrideTrigger::Karma),
            (false, false) => None,
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            OverrideTrigger::Both => {
                "Both duplicate comment ratio and extremely low comment karma triggered the override."
            }
            OverrideTrigger::Duplicate => "Duplicate comment ratio triggered the override.",
            OverrideTrigger::Karma => "Karma discrepancy triggered the override.",
        }
    }
}

/// Analyze a profile against the current wall clock.
pub fn analyze(profile: &ProfileInput) -> AnalysisResult {
    analyze_at(profile, Utc::now())
}

/// Analyze a profile against a fixed reference time.
pub fn analyze_at(profile: &ProfileInput, now: DateTime<Utc>) -> AnalysisResult {
    analyze_with(profile, now, &CategoryWeights::default())
}

/// Analyze a profile with explicit weights.
///
/// Total: every profile yields a complete result with all four categories.
pub fn analyze_with(
    profile: &ProfileInput,
    now: DateTime<Utc>,
    weights: &CategoryWeights,
) -> AnalysisResult {
    let signals = ProfileSignals::from_profile(profile, now);

    let engagement = engagement::score_engagement(&signals);
    let content = content::score_content(profile.comments());
    let metadata = metadata::score_metadata(profile.description.as_deref(), &signals);
    let checks = additional::score_additional_checks(profile.comments(), signals.karma_ratio);

    let weighted = [
        (content.score, weights.content),
        (engagement.score, weights.engagement),
        (metadata.score, weights.metadata_weight(&signals)),
        (checks.combined.score, weights.additional_checks),
    ];
    let blended = weighted_average(&weighted);

    let trigger = OverrideTrigger::from_checks(&checks);
    let (bot_likelihood, override_explanation) = match trigger {
        Some(t) => (100, t.explanation().to_string()),
        None => (blended, String::new()),
    };

    AnalysisResult {
        bot_likelihood,
        status: STATUS_COMPLETE.to_string(),
        override_triggered: trigger.is_some(),
        override_explanation,
        analysis: CategoryBreakdown {
            content_analysis: content,
            engagement_with_users: engagement,
            profile_metadata: metadata,
            additional_checks: checks.combined,
        },
    }
}

/// Weighted mean of (score, weight) pairs, rounded to 0-100.
/// Zero total weight yields 0.
pub fn weighted_average(scores: &[(u8, f64)]) -> u8 {
    let total_weight: f64 = scores.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0;
    }
    let total: f64 = scores.iter().map(|(s, w)| f64::from(*s) * w).sum();
    round_score(total / total_weight)
}
