//! Report structures assembled from an analysis result

use crate::processing::analyzer::{AnalysisEngine, AnalysisResult};
use crate::processing::contact::ContactInfo;
use crate::processing::details::{Rubric, RubricDetail, ScoreRating};
use crate::processing::suggestions::Suggestion;
use crate::processing::text_processor::word_count;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to present one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall score, rating band and per-rubric breakdown
    pub summary: ReportSummary,

    /// Contact details found in the resume
    pub contact: ContactInfo,

    /// Ranked improvement suggestions
    pub suggestions: Vec<Suggestion>,

    /// Per-rubric breakdown in ATS, skills, grammar, format order
    pub details: Vec<RubricDetail>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Weighted readiness score (0-100)
    pub overall_score: u8,

    pub rating: ScoreRating,

    /// One-line verdict, e.g. "Good - Solid resume, some enhancements recommended"
    pub verdict: String,

    pub breakdown: Vec<ComponentScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub rubric: Rubric,
    pub score: u8,
    /// Share of the overall score, in percent
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the analyzer used
    pub analyzer_version: String,

    /// Resume file analyzed
    pub resume_file: String,

    pub word_count: usize,

    /// Extraction and scoring time
    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn from_analysis(
        result: &AnalysisResult,
        engine: &AnalysisEngine,
        max_suggestions: usize,
        resume_file: &str,
        processing_time_ms: u64,
    ) -> Self {
        let weights = engine.weights();
        let rating = ScoreRating::from_score(result.overall_score);

        let breakdown = vec![
            ComponentScore {
                rubric: Rubric::Ats,
                score: result.ats_score,
                weight: weights.ats,
            },
            ComponentScore {
                rubric: Rubric::Skills,
                score: result.skills_score,
                weight: weights.skills,
            },
            ComponentScore {
                rubric: Rubric::Grammar,
                score: result.grammar_score,
                weight: weights.grammar,
            },
            ComponentScore {
                rubric: Rubric::Format,
                score: result.format_score,
                weight: weights.format,
            },
        ];

        Self {
            summary: ReportSummary {
                overall_score: result.overall_score,
                rating,
                verdict: rating.to_string(),
                breakdown,
            },
            contact: result.contact.clone(),
            suggestions: engine.suggestions(result, max_suggestions),
            details: engine.details(result),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                word_count: word_count(&result.content),
                processing_time_ms,
            },
        }
    }

    /// Rubrics scoring below 70, weakest first
    pub fn weakest_rubrics(&self) -> Vec<&ComponentScore> {
        let mut weak: Vec<&ComponentScore> = self
            .summary
            .breakdown
            .iter()
            .filter(|c| c.score < 70)
            .collect();
        weak.sort_by_key(|c| c.score);
        weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_blank_analysis() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze("");
        let report = AnalysisReport::from_analysis(&result, &engine, 8, "cv.txt", 3);

        assert_eq!(report.summary.overall_score, 5);
        assert_eq!(report.summary.rating, ScoreRating::NeedsWork);
        assert_eq!(
            report.summary.verdict,
            "Needs Work - Major revisions recommended before applying"
        );
        assert_eq!(report.summary.breakdown.len(), 4);
        assert_eq!(report.summary.breakdown[0].weight, 30);
        assert_eq!(report.suggestions.len(), 8);
        assert_eq!(report.details.len(), 4);
        assert_eq!(report.metadata.resume_file, "cv.txt");
        assert_eq!(report.metadata.word_count, 0);
    }

    #[test]
    fn test_suggestion_cap_is_respected() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze("");
        let report = AnalysisReport::from_analysis(&result, &engine, 3, "cv.txt", 0);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn test_weakest_rubrics_sorted() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze("");
        let report = AnalysisReport::from_analysis(&result, &engine, 8, "cv.txt", 0);

        let weak: Vec<u8> = report.weakest_rubrics().iter().map(|c| c.score).collect();
        assert_eq!(weak, vec![0, 5, 5, 10]);
    }

    #[test]
    fn test_report_serializes() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze("jane@doe.dev");
        let report = AnalysisReport::from_analysis(&result, &engine, 8, "cv.txt", 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["contact"]["email"], "jane@doe.dev");
        assert_eq!(json["summary"]["breakdown"][0]["rubric"], "ats");
    }
}
