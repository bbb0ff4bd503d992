//! Main analysis engine combining the four rubrics into one readiness score

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::lexicon::Lexicon;
use crate::processing::ats_matcher::score_ats;
use crate::processing::contact::{extract_contact, ContactInfo};
use crate::processing::details::{self, RubricDetail};
use crate::processing::format::score_format;
use crate::processing::grammar::score_grammar_and_writing;
use crate::processing::skills::score_skills;
use crate::processing::suggestions::{generate_suggestions, Suggestion};
use crate::processing::text_processor::NormalizedText;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one analysis. Scores are all in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub ats_score: u8,
    pub skills_score: u8,
    pub grammar_score: u8,
    pub format_score: u8,
    pub contact: ContactInfo,
    /// Trimmed source text the scores were computed from
    pub content: String,
}

/// Rubric weights as whole percentages; they must add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub ats: u32,
    pub skills: u32,
    pub grammar: u32,
    pub format: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ats: 30,
            skills: 30,
            grammar: 20,
            format: 20,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        let total = [self.ats, self.skills, self.grammar, self.format]
            .iter()
            .try_fold(0u32, |sum, w| sum.checked_add(*w));
        match total {
            Some(100) => Ok(()),
            Some(total) => Err(ResumeAnalyzerError::Configuration(format!(
                "Scoring weights must add up to 100, got {}",
                total
            ))),
            None => Err(ResumeAnalyzerError::Configuration(
                "Scoring weights must add up to 100, got an out-of-range total".to_string(),
            )),
        }
    }

    /// Weighted mean rounded half-up, computed in hundredths to stay exact
    pub fn combine(&self, ats: u8, skills: u8, grammar: u8, format: u8) -> u8 {
        let weighted = ats as u32 * self.ats
            + skills as u32 * self.skills
            + grammar as u32 * self.grammar
            + format as u32 * self.format;
        ((weighted + 50) / 100).min(100) as u8
    }
}

/// Stateless scoring engine over a shared, immutable lexicon
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    lexicon: Arc<Lexicon>,
    weights: ScoringWeights,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl AnalysisEngine {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    /// Build an engine from configuration, loading a custom lexicon if one is set
    pub fn from_config(config: &Config) -> Result<Self> {
        let lexicon = match &config.lexicon.custom_lexicon {
            Some(path) => Arc::new(Lexicon::load(path)?),
            None => Lexicon::standard(),
        };
        Self::new(lexicon).with_weights(config.scoring.weights())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score a document. Never fails: blank input yields the floor scores.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_normalized(NormalizedText::from(text))
    }

    /// Same as [`analyze`](Self::analyze) for input that may be missing entirely
    pub fn analyze_optional(&self, text: Option<&str>) -> AnalysisResult {
        self.analyze_normalized(NormalizedText::new(text))
    }

    fn analyze_normalized(&self, text: NormalizedText) -> AnalysisResult {
        let lexicon = self.lexicon.as_ref();
        let contact = extract_contact(&text.original, lexicon.patterns());

        let skills_score = score_skills(&text.lower, lexicon);
        let grammar_score = score_grammar_and_writing(&text.original, &text.lower, lexicon);
        let ats_score = score_ats(&text.original, &text.lower, &contact, lexicon);
        let format_score = score_format(&text.original, &text.lower, lexicon);

        let overall_score = self
            .weights
            .combine(ats_score, skills_score, grammar_score, format_score);

        debug!(
            "Scored {} chars: overall={} ats={} skills={} grammar={} format={}",
            text.original.len(),
            overall_score,
            ats_score,
            skills_score,
            grammar_score,
            format_score
        );

        AnalysisResult {
            overall_score,
            ats_score,
            skills_score,
            grammar_score,
            format_score,
            contact,
            content: text.original,
        }
    }

    pub fn extract_contact(&self, text: &str) -> ContactInfo {
        extract_contact(text.trim(), self.lexicon.patterns())
    }

    /// Ranked improvement suggestions, capped at `limit`
    pub fn suggestions(&self, result: &AnalysisResult, limit: usize) -> Vec<Suggestion> {
        generate_suggestions(result, limit)
    }

    /// Human-readable breakdown of each rubric, in ATS/skills/grammar/format order
    pub fn details(&self, result: &AnalysisResult) -> Vec<RubricDetail> {
        details::rubric_details(result, &self.lexicon)
    }
}
