use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info, warn};

use botscope::config::{Config, OutputFormat};
use botscope::models::ProfileInput;
use botscope::output::{self, terminal, BatchEntry};

/// Botscope: heuristic bot-likelihood scoring for social media profiles.
///
/// Reads scraped profile records as JSON and reports how likely each
/// account is to be automated, with a per-category explanation.
#[derive(Parser)]
#[command(name = "botscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single profile (reads stdin when no path is given)
    Analyze {
        /// JSON file containing one profile, or {"message": profile}
        path: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze many profiles from a JSON array or JSON Lines file
    Batch {
        /// File with a JSON array of profiles or one profile per line
        path: PathBuf,

        /// Print the results as a JSON array of {index, result} records
        #[arg(long)]
        json: bool,

        /// Only report profiles at or above this bot likelihood
        #[arg(long, default_value = "0")]
        min_score: u8,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("botscope=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { path, json } => {
            let raw = read_input(path.as_deref())?;
            let profile = ProfileInput::from_json(&raw)?;
            debug!(?profile, "Received profile data");

            let result = botscope::analyze_at(&profile, config.now());
            info!(
                bot_likelihood = result.bot_likelihood,
                override_triggered = result.override_triggered,
                comments = profile.comments().len(),
                "Analyzed profile"
            );

            match output_format(&config, json) {
                OutputFormat::Json => println!("{}", output::to_json(&result)?),
                OutputFormat::Terminal => terminal::display_analysis(&result),
            }
        }

        Commands::Batch {
            path,
            json,
            min_score,
        } => {
            let raw = read_input(Some(path.as_path()))?;
            let payloads = split_batch(&raw)?;
            let now = config.now();

            let mut entries = Vec::with_capacity(payloads.len());
            let mut skipped = 0usize;

            for (i, payload) in payloads.into_iter().enumerate() {
                let index = i + 1;
                let profile = match payload.and_then(ProfileInput::from_value) {
                    Ok(p) => p,
                    Err(e) => {
                        warn!(entry = index, error = %e, "Skipping malformed profile");
                        skipped += 1;
                        continue;
                    }
                };

                let result = botscope::analyze_at(&profile, now);
                debug!(
                    entry = index,
                    bot_likelihood = result.bot_likelihood,
                    override_triggered = result.override_triggered,
                    "Analyzed profile"
                );

                entries.push(BatchEntry {
                    index,
                    label: profile_label(&profile),
                    result,
                });
            }

            info!(analyzed = entries.len(), skipped, "Batch complete");

            entries.retain(|e| e.result.bot_likelihood >= min_score);

            match output_format(&config, json) {
                OutputFormat::Json => println!("{}", output::batch_to_json(&entries)?),
                OutputFormat::Terminal => terminal::display_batch(&entries, skipped),
            }
        }
    }

    Ok(())
}

/// The --json flag wins over BOTSCOPE_OUTPUT.
fn output_format(config: &Config, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output_format
    }
}

/// Read the whole payload from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}

/// Split a batch file into per-profile JSON values.
///
/// A file starting with `[` is one JSON array; anything else is JSON Lines.
/// A bad line is returned as an error for that entry only.
fn split_batch(raw: &str) -> Result<Vec<Result<Value>>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(trimmed).context("Batch file is not a valid JSON array")?;
        return Ok(values.into_iter().map(Ok).collect());
    }

    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<Value>(line).context("Line is not valid JSON"))
        .collect())
}

/// Short label for batch output: a description preview.
fn profile_label(profile: &ProfileInput) -> String {
    match profile.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => output::truncate_chars(d, 40),
        _ => "(no description)".to_string(),
    }
}
