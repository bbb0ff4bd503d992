//! Lexicon and pattern registry
//!
//! Static vocabulary (skills, action verbs, section headers) and the compiled
//! patterns used by the scorers. A [`Lexicon`] is built once and shared
//! read-only; the engine takes it by `Arc` so tests and callers can swap in a
//! reduced or extended vocabulary.

pub mod defaults;
pub mod patterns;
pub mod phrases;

use crate::error::{Result, ResumeAnalyzerError};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

pub use patterns::Patterns;
pub use phrases::PhraseSet;

static STANDARD: Lazy<Arc<Lexicon>> =
    Lazy::new(|| Arc::new(Lexicon::builtin().expect("built-in lexicon must compile")));

/// Immutable vocabulary and pattern registry
#[derive(Debug, Clone)]
pub struct Lexicon {
    technical_skills: PhraseSet,
    soft_skills: PhraseSet,
    action_verbs: PhraseSet,
    section_headers: PhraseSet,
    modern_skills: PhraseSet,
    ats_keywords: PhraseSet,
    skills_headers: Vec<String>,
    patterns: Patterns,
}

/// Word lists as read from a lexicon file.
///
/// Every list is optional. A missing list keeps the built-in one; a present
/// list replaces it, or is appended to it when `extend` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSource {
    pub extend: bool,
    pub technical_skills: Option<Vec<String>>,
    pub soft_skills: Option<Vec<String>>,
    pub action_verbs: Option<Vec<String>>,
    pub section_headers: Option<Vec<String>>,
    pub modern_skills: Option<Vec<String>>,
    pub ats_keywords: Option<Vec<String>>,
}

/// Names of the individual lists, for display and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LexiconSet {
    TechnicalSkills,
    SoftSkills,
    ActionVerbs,
    SectionHeaders,
    ModernSkills,
    AtsKeywords,
}

impl LexiconSet {
    pub const ALL: [LexiconSet; 6] = [
        LexiconSet::TechnicalSkills,
        LexiconSet::SoftSkills,
        LexiconSet::ActionVerbs,
        LexiconSet::SectionHeaders,
        LexiconSet::ModernSkills,
        LexiconSet::AtsKeywords,
    ];
}

impl std::fmt::Display for LexiconSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            LexiconSet::TechnicalSkills => "Technical skills",
            LexiconSet::SoftSkills => "Soft skills",
            LexiconSet::ActionVerbs => "Action verbs",
            LexiconSet::SectionHeaders => "Section headers",
            LexiconSet::ModernSkills => "Modern skills",
            LexiconSet::AtsKeywords => "ATS keywords",
        };
        write!(f, "{}", name)
    }
}

impl Lexicon {
    /// Shared instance of the built-in lexicon
    pub fn standard() -> Arc<Lexicon> {
        Arc::clone(&STANDARD)
    }

    /// Build the built-in lexicon from scratch
    pub fn builtin() -> Result<Self> {
        Self::from_source(LexiconSource::default())
    }

    pub fn from_source(source: LexiconSource) -> Result<Self> {
        let merge = |custom: Option<Vec<String>>, builtin: &[&str]| -> Vec<String> {
            match custom {
                Some(mut words) if source.extend => {
                    words.extend(builtin.iter().map(|s| s.to_string()));
                    words
                }
                Some(words) => words,
                None => builtin.iter().map(|s| s.to_string()).collect(),
            }
        };

        let technical_skills = PhraseSet::new(merge(source.technical_skills.clone(), defaults::TECHNICAL_SKILLS))?;
        let soft_skills = PhraseSet::new(merge(source.soft_skills.clone(), defaults::SOFT_SKILLS))?;
        let action_verbs = PhraseSet::new(merge(source.action_verbs.clone(), defaults::ACTION_VERBS))?;
        let section_headers = PhraseSet::new(merge(source.section_headers.clone(), defaults::SECTION_HEADERS))?;
        let modern_skills = PhraseSet::new(merge(source.modern_skills.clone(), defaults::MODERN_SKILLS))?;
        let ats_keywords = PhraseSet::new(merge(source.ats_keywords.clone(), defaults::ATS_KEYWORDS))?;

        let skills_headers = section_headers
            .iter()
            .filter(|h| defaults::SKILLS_HEADER_MARKERS.iter().any(|m| h.contains(m)))
            .map(|h| h.to_string())
            .collect();

        let lexicon = Self {
            technical_skills,
            soft_skills,
            action_verbs,
            section_headers,
            modern_skills,
            ats_keywords,
            skills_headers,
            patterns: Patterns::compile()?,
        };

        debug!(
            "Lexicon built: {} technical, {} soft, {} verbs, {} headers",
            lexicon.technical_skills.len(),
            lexicon.soft_skills.len(),
            lexicon.action_verbs.len(),
            lexicon.section_headers.len()
        );

        Ok(lexicon)
    }

    /// Load a lexicon from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading custom lexicon from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let source: LexiconSource = toml::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Lexicon(format!("Failed to parse lexicon '{}': {}", path.display(), e))
        })?;

        Self::from_source(source)
    }

    pub fn technical_skills(&self) -> &PhraseSet {
        &self.technical_skills
    }

    pub fn soft_skills(&self) -> &PhraseSet {
        &self.soft_skills
    }

    pub fn action_verbs(&self) -> &PhraseSet {
        &self.action_verbs
    }

    pub fn section_headers(&self) -> &PhraseSet {
        &self.section_headers
    }

    pub fn modern_skills(&self) -> &PhraseSet {
        &self.modern_skills
    }

    pub fn ats_keywords(&self) -> &PhraseSet {
        &self.ats_keywords
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    pub fn set(&self, set: LexiconSet) -> &PhraseSet {
        match set {
            LexiconSet::TechnicalSkills => &self.technical_skills,
            LexiconSet::SoftSkills => &self.soft_skills,
            LexiconSet::ActionVerbs => &self.action_verbs,
            LexiconSet::SectionHeaders => &self.section_headers,
            LexiconSet::ModernSkills => &self.modern_skills,
            LexiconSet::AtsKeywords => &self.ats_keywords,
        }
    }

    /// Whether the lower-cased text contains a header naming a skills section
    pub fn has_skills_section(&self, lower: &str) -> bool {
        self.skills_headers.iter().any(|h| lower.contains(h.as_str()))
    }
}
