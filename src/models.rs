// Data models — the profile payload coming in and the analysis going out.
//
// These are the types that flow through the application. The scoring
// modules only ever read a ProfileInput and only ever build the result
// types below, so callers can depend on this module without pulling in
// any scoring internals.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fixed status string reported with every completed analysis.
pub const STATUS_COMPLETE: &str = "Analysis complete";

/// A scraped profile record. Every field is optional; missing data degrades
/// to a neutral score rather than failing the analysis.
///
/// Fields are read leniently: a value of the wrong JSON type is treated as
/// absent instead of rejecting the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Date-like string for when the account was created
    #[serde(default, deserialize_with = "lenient_string")]
    pub account_age: Option<String>,
    /// Anything other than a JSON array reads as no comments
    #[serde(default, deserialize_with = "lenient_comments")]
    pub recent_comments: Option<Vec<Comment>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub post_karma: Option<f64>,
    /// An explicit `null` counts as present with value 0
    #[serde(
        default,
        deserialize_with = "present_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_karma: Option<f64>,
}

/// One recent comment. Only the text is inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Only called when the key exists, so `null` is "present" here.
fn present_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Some(0.0),
        other => other.as_f64(),
    })
}

fn lenient_comments<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Comment>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let comments = items
        .iter()
        .map(|item| Comment {
            text: item.get("text").and_then(Value::as_str).map(str::to_string),
        })
        .collect();
    Ok(Some(comments))
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// The comment text, with a missing text read as empty.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl ProfileInput {
    /// Parse a profile payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Profile payload is not valid JSON")?;
        Self::from_value(value)
    }

    /// Build a profile from a parsed JSON value.
    ///
    /// Accepts either a bare profile object or the request envelope
    /// `{"message": {...}}`. Wrongly-typed fields degrade to absent; only a
    /// payload that is not a JSON object is an error.
    pub fn from_value(value: Value) -> Result<Self> {
        let profile = match value {
            Value::Object(mut map) if map.get("message").is_some_and(Value::is_object) => map
                .remove("message")
                .unwrap_or(Value::Null),
            other => other,
        };
        if !profile.is_object() {
            anyhow::bail!("Profile payload must be a JSON object");
        }
        serde_json::from_value(profile).context("Profile payload could not be read")
    }

    /// The recent comments, with an absent list read as empty.
    pub fn comments(&self) -> &[Comment] {
        self.recent_comments.as_deref().unwrap_or(&[])
    }

    /// Comment karma divided by post karma.
    ///
    /// Only defined when post karma is present and non-zero and comment
    /// karma is present (zero included). The guard runs before the division.
    pub fn karma_ratio(&self) -> Option<f64> {
        let post = self.post_karma.filter(|k| *k != 0.0 && !k.is_nan())?;
        let comment = self.comment_karma?;
        Some(comment / post)
    }
}

/// The four analysis dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Content,
    Engagement,
    Metadata,
    AdditionalChecks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Content,
        Category::Engagement,
        Category::Metadata,
        Category::AdditionalChecks,
    ];

    /// The key this category is reported under in the `analysis` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Content => "content_analysis",
            Category::Engagement => "engagement_with_users",
            Category::Metadata => "profile_metadata",
            Category::AdditionalChecks => "additional_checks",
        }
    }

    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Content => "Content",
            Category::Engagement => "Engagement",
            Category::Metadata => "Profile metadata",
            Category::AdditionalChecks => "Additional checks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score and explanation for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// 0-100
    pub score: u8,
    pub description: String,
}

impl CategoryResult {
    /// Build a result, clamping the score to 100.
    pub fn new(score: u8, description: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            description: description.into(),
        }
    }
}

/// Round a floating-point score to the nearest integer in 0-100.
///
/// Scores are only rounded at category and final-aggregate boundaries.
/// NaN rounds to 0.
pub fn round_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Per-category breakdown. A struct rather than a map so all four
/// categories are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub content_analysis: CategoryResult,
    pub engagement_with_users: CategoryResult,
    pub profile_metadata: CategoryResult,
    pub additional_checks: CategoryResult,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Content => &self.content_analysis,
            Category::Engagement => &self.engagement_with_users,
            Category::Metadata => &self.profile_metadata,
            Category::AdditionalChecks => &self.additional_checks,
        }
    }

    /// Iterate categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// The full output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0-100
    pub bot_likelihood: u8,
    pub status: String,
    #[serde(rename = "overrideTriggered")]
    pub override_triggered: bool,
    /// Empty when no override fired
    #[serde(rename = "overrideExplanation")]
    pub override_explanation: String,
    pub analysis: CategoryBreakdown,
}

/// Display tier for a bot likelihood score. Used for terminal output only;
/// the JSON result carries the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikelihoodTier {
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl LikelihoodTier {
    /// Determine the tier from a bot likelihood (0-100).
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 76 => LikelihoodTier::VeryLikely,
            s if s >= 51 => LikelihoodTier::Likely,
            s if s >= 26 => LikelihoodTier::Possible,
            _ => LikelihoodTier::Unlikely,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikelihoodTier::Unlikely => "Unlikely",
            LikelihoodTier::Possible => "Possible",
            LikelihoodTier::Likely => "Likely",
            LikelihoodTier::VeryLikely => "Very likely",
        }
    }
}

impl std::fmt::Display for LikelihoodTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
