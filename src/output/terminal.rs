// Colored terminal output for single analyses and batch summaries.

use colored::Colorize;

use crate::models::{AnalysisResult, LikelihoodTier};
use crate::output::BatchEntry;

/// Display one analysis with its per-category breakdown.
pub fn display_analysis(result: &AnalysisResult) {
    let tier = LikelihoodTier::from_score(result.bot_likelihood);

    println!("\n{}", "=== Bot Likelihood Analysis ===".bold());
    println!(
        "  Bot likelihood: {}/100 ({})",
        result.bot_likelihood,
        colorize_tier(tier)
    );

    if result.override_triggered {
        println!(
            "  {} {}",
            "Override:".red().bold(),
            result.override_explanation
        );
    }

    println!();
    for (category, detail) in result.analysis.iter() {
        println!(
            "  {:<18} {:>3}  {}",
            category.label(),
            colorize_score(detail.score),
            detail.description.dimmed()
        );
    }
    println!("\n  {}", result.status.dimmed());
}

/// Display a ranked summary of a batch, highest likelihood first.
pub fn display_batch(entries: &[BatchEntry], skipped: usize) {
    if entries.is_empty() {
        println!("No profiles analyzed.");
    } else {
        let mut ranked: Vec<&BatchEntry> = entries.iter().collect();
        ranked.sort_by(|a, b| b.result.bot_likelihood.cmp(&a.result.bot_likelihood));

        println!(
            "\n{}",
            format!("=== Batch Report ({} profiles) ===", entries.len()).bold()
        );
        println!();
        println!(
            "  {:>5}  {:>5}  {:<12} {:<8}  {}",
            "Entry".dimmed(),
            "Score".dimmed(),
            "Tier".dimmed(),
            "Override".dimmed(),
            "Description".dimmed(),
        );
        println!("  {}", "-".repeat(72).dimmed());

        for entry in ranked {
            let tier = LikelihoodTier::from_score(entry.result.bot_likelihood);
            let override_str = if entry.result.override_triggered {
                "yes".red().to_string()
            } else {
                "no".normal().to_string()
            };
            println!(
                "  {:>5}  {:>5}  {:<12} {:<8}  {}",
                format!("#{}", entry.index),
                entry.result.bot_likelihood,
                colorize_tier(tier),
                override_str,
                entry.label,
            );
        }
        println!();

        let very_likely = entries
            .iter()
            .filter(|e| {
                LikelihoodTier::from_score(e.result.bot_likelihood) == LikelihoodTier::VeryLikely
            })
            .count();
        let overrides = entries.iter().filter(|e| e.result.override_triggered).count();
        if very_likely > 0 {
            println!("  {} {} very likely bots", "!!".red().bold(), very_likely);
        }
        if overrides > 0 {
            println!("  {} {} overrides triggered", "!".bright_red(), overrides);
        }
    }

    if skipped > 0 {
        println!("  {} {} malformed entries skipped", "~".yellow(), skipped);
    }
}

fn colorize_tier(tier: LikelihoodTier) -> String {
    match tier {
        LikelihoodTier::VeryLikely => tier.as_str().red().bold().to_string(),
        LikelihoodTier::Likely => tier.as_str().bright_red().to_string(),
        LikelihoodTier::Possible => tier.as_str().yellow().to_string(),
        LikelihoodTier::Unlikely => tier.as_str().green().to_string(),
    }
}

fn colorize_score(score: u8) -> String {
    let s = format!("{score:>3}");
    match LikelihoodTier::from_score(score) {
        LikelihoodTier::VeryLikely => s.red().to_string(),
        LikelihoodTier::Likely => s.bright_red().to_string(),
        LikelihoodTier::Possible => s.yellow().to_string(),
        LikelihoodTier::Unlikely => s.green().to_string(),
    }
}
