//! Scoring engine: normalization, contact extraction and the four rubrics

pub mod text_processor;
pub mod contact;
pub mod skills;
pub mod grammar;
pub mod ats_matcher;
pub mod format;
pub mod analyzer;
pub mod suggestions;
pub mod details;

/// Clamp a raw rubric total into the 0..=100 score range
pub(crate) fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
