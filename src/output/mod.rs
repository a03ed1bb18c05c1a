// Output formatting — terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

use crate::models::AnalysisResult;

/// One analyzed profile in a batch, labelled for display.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// 1-based position in the input
    pub index: usize,
    /// Short preview of the profile description, if any
    pub label: String,
    pub result: AnalysisResult,
}

/// Render a single result as pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One element of the batch JSON array.
#[derive(Serialize)]
struct BatchRecord<'a> {
    index: usize,
    result: &'a AnalysisResult,
}

/// Render a batch as a JSON array of `{index, result}` records, in input
/// order. `index` is the 1-based input position, so filtered output can be
/// traced back to its entry.
pub fn batch_to_json(entries: &[BatchEntry]) -> Result<String> {
    let records: Vec<BatchRecord<'_>> = entries
        .iter()
        .map(|e| BatchRecord {
            index: e.index,
            result: &e.result,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so it never panics on multi-byte
/// characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
