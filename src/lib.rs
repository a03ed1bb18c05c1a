// Botscope: heuristic bot-likelihood scoring for social media profiles
//
// This is the library root. The scoring core is pure: every module under
// `scoring` is a function of its inputs with no I/O and no shared state.

pub mod config;
pub mod models;
pub mod output;
pub mod scoring;

pub use models::{AnalysisResult, CategoryResult, ProfileInput};
pub use scoring::aggregate::{analyze, analyze_at, analyze_with, CategoryWeights};
