// Scoring — the bot-likelihood heuristics.
//
// Data flow: ProfileInput -> signals (normalizer) -> four category scorers
// -> aggregate. Every function here is pure; nothing logs or touches I/O.

pub mod additional;
pub mod aggregate;
pub mod content;
pub mod engagement;
pub mod metadata;
pub mod signals;
