//! Ranked improvement suggestions

use crate::processing::analyzer::AnalysisResult;
use crate::processing::contact::ContactField;
use crate::processing::text_processor::word_count;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Sub-scores below this trigger the rubric's suggestions
const NEEDS_WORK_BELOW: u8 = 70;
/// Overall scores at or above this also get the positive suggestions
const HIGH_SCORE: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionPriority {
    Critical,
    Important,
    Recommended,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCategory {
    Contact,
    Skills,
    Writing,
    Format,
    Ats,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub priority: SuggestionPriority,
    pub category: SuggestionCategory,
    pub text: String,
}

impl Suggestion {
    fn new(priority: SuggestionPriority, category: SuggestionCategory, text: &str) -> Self {
        Self {
            priority,
            category,
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "• {}", self.text)
    }
}

/// Evaluate the suggestion rules top to bottom and keep the first `limit`.
pub fn generate_suggestions(result: &AnalysisResult, limit: usize) -> Vec<Suggestion> {
    use SuggestionCategory::*;
    use SuggestionPriority::*;

    let mut suggestions = Vec::new();
    let contact = &result.contact;

    if !contact.has(ContactField::Email) {
        suggestions.push(Suggestion::new(
            Critical,
            Contact,
            "CRITICAL: Add your email address at the top of the resume",
        ));
    }
    if !contact.has(ContactField::Phone) {
        suggestions.push(Suggestion::new(
            Important,
            Contact,
            "IMPORTANT: Include your phone number for recruiter contact",
        ));
    }
    if !contact.has(ContactField::Linkedin) {
        suggestions.push(Suggestion::new(
            Recommended,
            Contact,
            "Add LinkedIn profile URL to increase professional visibility",
        ));
    }
    if !contact.has_portfolio() {
        suggestions.push(Suggestion::new(
            Recommended,
            Contact,
            "Include GitHub or portfolio link to showcase your work",
        ));
    }

    if result.skills_score < NEEDS_WORK_BELOW {
        for text in [
            "Expand skills section with relevant technical and soft skills",
            "Mirror keywords from target job descriptions",
            "Create a dedicated 'Skills' or 'Technical Skills' section",
        ] {
            suggestions.push(Suggestion::new(Recommended, Skills, text));
        }
    }

    if result.grammar_score < NEEDS_WORK_BELOW {
        for text in [
            "Start bullet points with strong action verbs (e.g., Developed, Led, Implemented)",
            "Add quantifiable achievements (e.g., 'Increased sales by 25%')",
            "Avoid first-person pronouns (I, me, my)",
        ] {
            suggestions.push(Suggestion::new(Recommended, Writing, text));
        }
    }

    if result.format_score < NEEDS_WORK_BELOW {
        for text in [
            "Use consistent bullet point formatting throughout",
            "Add clear section headers: Experience, Education, Skills, Projects",
            "Maintain proper spacing between sections",
        ] {
            suggestions.push(Suggestion::new(Recommended, Format, text));
        }

        let words = word_count(&result.content);
        if words < 300 {
            suggestions.push(Suggestion::new(
                Recommended,
                Format,
                "Expand content - aim for 400-700 words for optimal length",
            ));
        } else if words > 900 {
            suggestions.push(Suggestion::new(
                Recommended,
                Format,
                "Condense content - keep resume concise (1-2 pages max)",
            ));
        }
    }

    if result.ats_score < NEEDS_WORK_BELOW {
        for text in [
            "Use standard section headers that ATS systems recognize",
            "Include dates in standard format (e.g., 'Jan 2020 - Dec 2022')",
            "Avoid special characters, images, and complex formatting",
        ] {
            suggestions.push(Suggestion::new(Recommended, Ats, text));
        }
    }

    if suggestions.is_empty() || result.overall_score >= HIGH_SCORE {
        for text in [
            "Excellent work! Your resume is well-optimized",
            "Continue tailoring keywords for each specific job application",
            "Keep your resume updated with latest skills and achievements",
        ] {
            suggestions.push(Suggestion::new(Positive, General, text));
        }
    }

    suggestions.truncate(limit);
    suggestions
}

/// One suggestion per line, bullet-prefixed
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    suggestions
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::contact::ContactInfo;

    fn result(scores: [u8; 5], content: &str) -> AnalysisResult {
        AnalysisResult {
            overall_score: scores[0],
            ats_score: scores[1],
            skills_score: scores[2],
            grammar_score: scores[3],
            format_score: scores[4],
            contact: ContactInfo::default(),
            content: content.to_string(),
        }
    }

    fn with_full_contact(mut result: AnalysisResult) -> AnalysisResult {
        result.contact = crate::processing::contact::extract_contact(
            "me@mail.com 555-123-4567 linkedin.com/in/me https://me.dev",
            &crate::lexicon::Patterns::compile().unwrap(),
        );
        result
    }

    #[test]
    fn test_low_scores_are_capped_at_eight() {
        let suggestions = generate_suggestions(&result([5, 5, 0, 10, 5], ""), DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0].priority, SuggestionPriority::Critical);
        assert_eq!(suggestions[1].priority, SuggestionPriority::Important);
        // four contact rules, then skills, then one writing suggestion
        assert_eq!(suggestions[4].category, SuggestionCategory::Skills);
        assert_eq!(suggestions[7].category, SuggestionCategory::Writing);
        assert!(suggestions.iter().all(|s| s.priority != SuggestionPriority::Positive));
    }

    #[test]
    fn test_positive_when_nothing_to_fix() {
        let r = with_full_contact(result([80, 75, 75, 75, 75], ""));
        let suggestions = generate_suggestions(&r, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.priority == SuggestionPriority::Positive));
    }

    #[test]
    fn test_high_score_appends_positive_after_fixes() {
        let r = result([90, 95, 95, 95, 95], "");
        let suggestions = generate_suggestions(&r, DEFAULT_SUGGESTION_LIMIT);
        // four contact gaps + three positive
        assert_eq!(suggestions.len(), 7);
        assert_eq!(suggestions[4].priority, SuggestionPriority::Positive);
    }

    #[test]
    fn test_mid_score_with_fixes_gets_no_positive() {
        let r = result([70, 75, 75, 75, 75], "");
        let suggestions = generate_suggestions(&r, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions.iter().all(|s| s.category == SuggestionCategory::Contact));
    }

    #[test]
    fn test_word_count_conditional_format_suggestion() {
        let short = with_full_contact(result([70, 75, 75, 75, 60], "too short"));
        let texts: Vec<String> = generate_suggestions(&short, 20).into_iter().map(|s| s.text).collect();
        assert!(texts.iter().any(|t| t.starts_with("Expand content")));

        let long_text = "word ".repeat(950);
        let long = with_full_contact(result([70, 75, 75, 75, 60], &long_text));
        let texts: Vec<String> = generate_suggestions(&long, 20).into_iter().map(|s| s.text).collect();
        assert!(texts.iter().any(|t| t.starts_with("Condense content")));

        let medium_text = "word ".repeat(500);
        let medium = with_full_contact(result([70, 75, 75, 75, 60], &medium_text));
        assert_eq!(generate_suggestions(&medium, 20).len(), 3);
    }

    #[test]
    fn test_render_is_newline_joined() {
        let r = with_full_contact(result([80, 75, 75, 75, 75], ""));
        let rendered = render_suggestions(&generate_suggestions(&r, DEFAULT_SUGGESTION_LIMIT));
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with("• Excellent work!"));
    }
}
