//! ATS (Applicant Tracking System) compatibility rubric

use crate::lexicon::patterns::count_capped;
use crate::lexicon::Lexicon;
use crate::processing::clamp_score;
use crate::processing::contact::{ContactField, ContactInfo};
use serde::{Deserialize, Serialize};

const DATE_SCAN_CAP: usize = 5;
const TRADEMARK_GLYPHS: &[char] = &['©', '®', '™'];

/// Parser-friendliness signals found in a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_portfolio: bool,
    pub section_headers: usize,
    pub ats_keywords: usize,
    pub dates: usize,
    pub has_trademark_glyphs: bool,
    pub has_non_ascii: bool,
    pub has_bullets: bool,
}

impl AtsSignals {
    pub fn collect(text: &str, lower: &str, contact: &ContactInfo, lexicon: &Lexicon) -> Self {
        let patterns = lexicon.patterns();

        Self {
            has_email: contact.has(ContactField::Email),
            has_phone: contact.has(ContactField::Phone),
            has_linkedin: contact.has(ContactField::Linkedin),
            has_portfolio: contact.has_portfolio(),
            section_headers: lexicon.section_headers().count_substrings(lower),
            ats_keywords: lexicon.ats_keywords().count_words(lower),
            dates: count_capped(&patterns.date, text, DATE_SCAN_CAP),
            has_trademark_glyphs: text.contains(TRADEMARK_GLYPHS),
            has_non_ascii: !text.is_ascii(),
            has_bullets: patterns.bullet.is_match(text),
        }
    }

    pub fn score(&self) -> u8 {
        let mut score = 20;

        if self.has_email {
            score += 8;
        }
        if self.has_phone {
            score += 8;
        }
        if self.has_linkedin {
            score += 6;
        }
        if self.has_portfolio {
            score += 3;
        }

        score += (self.section_headers as i32 * 5).min(30);
        score += (self.ats_keywords as i32 * 3).min(20);

        score += match self.dates {
            0 => 0,
            1 => 5,
            _ => 10,
        };

        // Both penalties apply independently
        if self.has_trademark_glyphs {
            score -= 5;
        }
        if self.has_non_ascii {
            score -= 3;
        }

        if self.has_bullets {
            score += 5;
        }

        clamp_score(score)
    }
}

/// Score ATS compatibility. Blank text gets the floor of 5.
pub fn score_ats(text: &str, lower: &str, contact: &ContactInfo, lexicon: &Lexicon) -> u8 {
    if text.trim().is_empty() {
        return 5;
    }
    AtsSignals::collect(text, lower, contact, lexicon).score()
}
