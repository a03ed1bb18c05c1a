// Input normalizer — derives secondary signals from the raw profile.
//
// Missing or malformed data never fails here: an unparseable date becomes
// an unknown age, a missing comment list becomes zero posts.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::ProfileInput;

/// Milliseconds in a 365-day year.
const MS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;

/// Signals derived from a profile, shared by all category scorers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSignals {
    /// Account age in (365-day) years, or None when unknown.
    /// Negative for creation dates in the future.
    pub account_age_years: Option<f64>,
    /// Number of recent comments
    pub posting_frequency: usize,
    /// Comment karma / post karma, when computable
    pub karma_ratio: Option<f64>,
}

impl ProfileSignals {
    /// Normalize a profile against the given reference time.
    pub fn from_profile(profile: &ProfileInput, now: DateTime<Utc>) -> Self {
        let account_age_years = profile
            .account_age
            .as_deref()
            .and_then(parse_account_date)
            .map(|created| account_age_years(created, now));

        Self {
            account_age_years,
            posting_frequency: profile.comments().len(),
            karma_ratio: profile.karma_ratio(),
        }
    }

    /// True when the age is known and under one year.
    pub fn is_new_account(&self) -> bool {
        self.account_age_years.is_some_and(|age| age < 1.0)
    }
}

/// Parse an account creation date.
///
/// Accepted forms, surrounding whitespace ignored:
/// - RFC 3339 timestamp: `2023-01-01T12:00:00Z`, `2023-01-01T12:00:00+02:00`
/// - naive ISO datetime, read as UTC: `2023-01-01T12:00:00`
/// - ISO calendar date, midnight UTC: `2023-01-01`
///
/// Anything else (including "Joined 3 years ago") is None.
pub fn parse_account_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Fractional years between `created` and `now`.
pub fn account_age_years(created: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created).num_milliseconds() as f64 / MS_PER_YEAR
}
