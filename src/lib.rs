//! Resume analyzer library
//!
//! Scores plain resume text on four rubrics (ATS compatibility, skills,
//! writing quality, format) against a fixed lexicon and combines them into one
//! readiness score, with contact extraction and ranked suggestions.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
pub use lexicon::{Lexicon, LexiconSource};
pub use processing::analyzer::{AnalysisEngine, AnalysisResult, ScoringWeights};
pub use processing::contact::{ContactField, ContactInfo};
pub use processing::suggestions::Suggestion;
