//! Human-readable breakdown of each rubric
//!
//! Details are derived from an [`AnalysisResult`] on demand and never stored
//! on it. Counts are recomputed from the result's content with the same lexicon
//! that produced the scores.

use crate::lexicon::patterns::count_capped;
use crate::lexicon::Lexicon;
use crate::processing::analyzer::AnalysisResult;
use crate::processing::contact::ContactField;
use crate::processing::format::BULLET_SCAN_CAP;
use crate::processing::text_processor::word_count;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantities are counted further in the detail view than in scoring
const DETAIL_QUANTITY_SCAN_CAP: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rubric {
    Ats,
    Skills,
    Grammar,
    Format,
}

impl Rubric {
    pub fn label(&self) -> &'static str {
        match self {
            Rubric::Ats => "ATS Compatibility",
            Rubric::Skills => "Skills",
            Rubric::Grammar => "Writing Quality",
            Rubric::Format => "Format & Structure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMark {
    Pass,
    Fail,
    Neutral,
    Warning,
}

impl CheckMark {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckMark::Pass => "✓",
            CheckMark::Fail => "✗",
            CheckMark::Neutral => "○",
            CheckMark::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub mark: CheckMark,
    pub text: String,
}

impl Check {
    fn new(mark: CheckMark, text: impl Into<String>) -> Self {
        Self {
            mark,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricDetail {
    pub rubric: Rubric,
    pub score: u8,
    /// Headline verdict, e.g. "Good - Well-structured for ATS parsing"
    pub rating: Option<String>,
    /// Labelled counts shown before the checks
    pub facts: Vec<(String, String)>,
    pub checks: Vec<Check>,
}

impl fmt::Display for RubricDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.rating {
            Some(rating) => writeln!(f, "{}: {}", self.rubric.label(), rating)?,
            None => writeln!(f, "{}:", self.rubric.label())?,
        }
        if !self.facts.is_empty() {
            writeln!(f)?;
            for (label, value) in &self.facts {
                writeln!(f, "{}: {}", label, value)?;
            }
        }
        if !self.checks.is_empty() {
            writeln!(f)?;
            for check in &self.checks {
                writeln!(f, "{} {}", check.mark.symbol(), check.text)?;
            }
        }
        Ok(())
    }
}

/// Overall readiness bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreRating {
    NeedsWork,
    BelowAverage,
    Fair,
    Good,
    Excellent,
    Outstanding,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreRating::Outstanding,
            80..=89 => ScoreRating::Excellent,
            70..=79 => ScoreRating::Good,
            60..=69 => ScoreRating::Fair,
            50..=59 => ScoreRating::BelowAverage,
            _ => ScoreRating::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Outstanding => "Outstanding",
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::BelowAverage => "Below Average",
            ScoreRating::NeedsWork => "Needs Work",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreRating::Outstanding => "Your resume is exceptionally well-optimized!",
            ScoreRating::Excellent => "Strong resume with minor room for improvement",
            ScoreRating::Good => "Solid resume, some enhancements recommended",
            ScoreRating::Fair => "Decent foundation, multiple improvements needed",
            ScoreRating::BelowAverage => "Significant improvements required",
            ScoreRating::NeedsWork => "Major revisions recommended before applying",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

/// Details for all four rubrics in ATS, skills, grammar, format order
pub fn rubric_details(result: &AnalysisResult, lexicon: &Lexicon) -> Vec<RubricDetail> {
    let lower = result.content.to_lowercase();
    vec![
        ats_detail(result),
        skills_detail(result, &lower, lexicon),
        grammar_detail(result, &lower, lexicon),
        format_detail(result, &lower, lexicon),
    ]
}

fn ats_detail(result: &AnalysisResult) -> RubricDetail {
    use CheckMark::*;

    let rating = match result.ats_score {
        85.. => "Excellent - Highly optimized for ATS systems",
        70..=84 => "Good - Well-structured for ATS parsing",
        50..=69 => "Fair - Some improvements needed",
        _ => "Poor - Significant ATS optimization required",
    };

    let contact = &result.contact;
    let mut checks = Vec::with_capacity(4);
    checks.push(match contact.get(ContactField::Email) {
        Some(email) => Check::new(Pass, format!("Email: {}", email)),
        None => Check::new(Fail, "Email not found - CRITICAL"),
    });
    checks.push(match contact.get(ContactField::Phone) {
        Some(phone) => Check::new(Pass, format!("Phone: {}", phone)),
        None => Check::new(Fail, "Phone not found - Important"),
    });
    checks.push(if contact.has(ContactField::Linkedin) {
        Check::new(Pass, "LinkedIn: Found")
    } else {
        Check::new(Fail, "LinkedIn not found - Recommended")
    });
    checks.push(if contact.has_portfolio() {
        Check::new(Pass, "GitHub/Portfolio: Found")
    } else {
        Check::new(Neutral, "GitHub/Portfolio not found - Optional")
    });

    RubricDetail {
        rubric: Rubric::Ats,
        score: result.ats_score,
        rating: Some(rating.to_string()),
        facts: Vec::new(),
        checks,
    }
}

fn skills_detail(result: &AnalysisResult, lower: &str, lexicon: &Lexicon) -> RubricDetail {
    use CheckMark::*;

    let tech = lexicon.technical_skills().count_words(lower);
    let soft = lexicon.soft_skills().count_words(lower);

    let checks = if tech >= 10 && soft >= 5 {
        vec![
            Check::new(Pass, "Excellent skill diversity"),
            Check::new(Pass, "Strong technical presence"),
        ]
    } else if tech >= 7 && soft >= 3 {
        vec![
            Check::new(Pass, "Good skill coverage"),
            Check::new(Neutral, "Consider adding more soft skills"),
        ]
    } else if tech >= 5 {
        vec![
            Check::new(Neutral, "Moderate skill presence"),
            Check::new(Warning, "Add more relevant technical keywords"),
        ]
    } else {
        vec![
            Check::new(Warning, "Limited skill keywords detected"),
            Check::new(Warning, "Significantly expand skills section"),
        ]
    };

    RubricDetail {
        rubric: Rubric::Skills,
        score: result.skills_score,
        rating: None,
        facts: vec![
            ("Technical Skills Detected".to_string(), tech.to_string()),
            ("Soft Skills Detected".to_string(), soft.to_string()),
        ],
        checks,
    }
}

fn grammar_detail(result: &AnalysisResult, lower: &str, lexicon: &Lexicon) -> RubricDetail {
    use CheckMark::*;

    let verbs = lexicon.action_verbs().count_words(lower);
    let quantities = count_capped(
        &lexicon.patterns().quantity,
        &result.content,
        DETAIL_QUANTITY_SCAN_CAP,
    );

    let rating = match result.grammar_score {
        85.. => "Excellent",
        70..=84 => "Good",
        50..=69 => "Fair",
        _ => "Needs Improvement",
    };

    let checks = if verbs >= 10 && quantities >= 5 {
        vec![
            Check::new(Pass, "Strong professional language"),
            Check::new(Pass, "Good use of metrics"),
        ]
    } else if verbs >= 6 && quantities >= 3 {
        vec![
            Check::new(Pass, "Good use of action verbs"),
            Check::new(Neutral, "Add more quantifiable results"),
        ]
    } else if verbs >= 3 {
        vec![
            Check::new(Neutral, "Use stronger action verbs"),
            Check::new(Warning, "Add metrics (%, $, numbers)"),
        ]
    } else {
        vec![
            Check::new(Warning, "Lacking action verbs"),
            Check::new(Warning, "Missing quantifiable achievements"),
        ]
    };

    RubricDetail {
        rubric: Rubric::Grammar,
        score: result.grammar_score,
        rating: Some(rating.to_string()),
        facts: vec![
            ("Action Verbs Found".to_string(), verbs.to_string()),
            ("Quantifiable Achievements".to_string(), quantities.to_string()),
        ],
        checks,
    }
}

fn format_detail(result: &AnalysisResult, lower: &str, lexicon: &Lexicon) -> RubricDetail {
    use CheckMark::*;

    let words = word_count(&result.content);
    let bullets = count_capped(&lexicon.patterns().bullet, &result.content, BULLET_SCAN_CAP);
    let sections = lexicon.section_headers().count_substrings(lower);

    let length = match words {
        300..=800 => Check::new(Pass, "Ideal length (300-800 words)"),
        0..=199 => Check::new(Warning, "Resume too short - expand content"),
        1001.. => Check::new(Warning, "Resume too long - be concise"),
        _ => Check::new(Neutral, "Acceptable length"),
    };
    let bullet_usage = match bullets {
        8..=30 => Check::new(Pass, "Good use of bullet points"),
        0..=4 => Check::new(Warning, "Use more bullet points"),
        _ => Check::new(Neutral, "Moderate bullet usage"),
    };
    let organization = match sections {
        5.. => Check::new(Pass, "Well-organized sections"),
        3..=4 => Check::new(Neutral, "Basic organization present"),
        _ => Check::new(Warning, "Add clear section headers"),
    };

    RubricDetail {
        rubric: Rubric::Format,
        score: result.format_score,
        rating: None,
        facts: vec![
            ("Word Count".to_string(), format!("{} words", words)),
            ("Bullet Points".to_string(), bullets.to_string()),
            ("Sections Detected".to_string(), sections.to_string()),
        ],
        checks: vec![length, bullet_usage, organization],
    }
}
