use std::env;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::scoring::signals::parse_account_date;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored report (default)
    Terminal,
    /// AnalysisResult JSON, one document per profile
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!(
                "BOTSCOPE_OUTPUT must be \"terminal\" or \"json\", got \"{other}\""
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Fixed "now" for account age calculations (BOTSCOPE_REFERENCE_DATE).
    /// Unset means the wall clock.
    pub reference_time: Option<DateTime<Utc>>,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let reference_time = match env::var("BOTSCOPE_REFERENCE_DATE") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_reference_time(&raw)?),
            _ => None,
        };

        let output_format = match env::var("BOTSCOPE_OUTPUT") {
            Ok(raw) => OutputFormat::parse(&raw)?,
            Err(_) => OutputFormat::Terminal,
        };

        Ok(Self {
            reference_time,
            output_format,
        })
    }

    /// The reference time to score against: the configured date, or now.
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}

/// Parse BOTSCOPE_REFERENCE_DATE using the same formats accepted for
/// account ages. Unlike account ages, a bad value here is an error.
pub fn parse_reference_time(raw: &str) -> Result<DateTime<Utc>> {
    match parse_account_date(raw) {
        Some(dt) => Ok(dt),
        None => anyhow::bail!(
            "BOTSCOPE_REFERENCE_DATE is not a valid date: \"{}\"\n\
             Use an ISO-8601 date such as 2025-01-01 or 2025-01-01T00:00:00Z.",
            raw.trim()
        ),
    }
}
