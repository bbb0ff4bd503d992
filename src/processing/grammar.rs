//! Grammar and writing quality rubric
//!
//! There is no parser here. Writing quality is approximated from action
//! verbs, quantified results and a few surface defects.

use crate::lexicon::patterns::count_capped;
use crate::lexicon::Lexicon;
use crate::processing::clamp_score;
use serde::{Deserialize, Serialize};

const QUANTITY_SCAN_CAP: usize = 10;
const TONE_PHRASES: &[&str] = &["responsible for", "led team", "managed", "developed"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSignals {
    pub action_verbs: usize,
    pub quantified_achievements: usize,
    pub has_double_space: bool,
    pub has_repeated_punctuation: bool,
    pub has_first_person: bool,
    pub has_bullets: bool,
    pub has_professional_tone: bool,
}

impl WritingSignals {
    pub fn collect(text: &str, lower: &str, lexicon: &Lexicon) -> Self {
        let patterns = lexicon.patterns();

        Self {
            action_verbs: lexicon.action_verbs().count_words(lower),
            quantified_achievements: count_capped(&patterns.quantity, text, QUANTITY_SCAN_CAP),
            has_double_space: text.contains("  "),
            has_repeated_punctuation: patterns.repeated_punctuation.is_match(text),
            has_first_person: patterns.first_person.is_match(text),
            has_bullets: patterns.bullet.is_match(text),
            has_professional_tone: TONE_PHRASES.iter().any(|p| lower.contains(p)),
        }
    }

    pub fn score(&self) -> u8 {
        let mut score = 40;

        score += (self.action_verbs as i32 * 2).min(30);
        score += (self.quantified_achievements as i32 * 2).min(15);

        if self.has_double_space {
            score -= 3;
        }
        if self.has_repeated_punctuation {
            score -= 3;
        }
        if self.has_first_person {
            score -= 5;
        }
        if self.has_bullets {
            score += 10;
        }
        if self.has_professional_tone {
            score += 5;
        }

        clamp_score(score)
    }
}

/// Score writing quality. Blank text gets the floor of 10.
pub fn score_grammar_and_writing(text: &str, lower: &str, lexicon: &Lexicon) -> u8 {
    if text.trim().is_empty() {
        return 10;
    }
    WritingSignals::collect(text, lower, lexicon).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        score_grammar_and_writing(text, &text.to_lowercase(), &Lexicon::builtin().unwrap())
    }

    #[test]
    fn test_blank_floor() {
        assert_eq!(score(""), 10);
        assert_eq!(score("   \n"), 10);
    }

    #[test]
    fn test_plain_text_gets_base() {
        assert_eq!(score("Quiet text without signals"), 40);
    }

    #[test]
    fn test_verbs_and_tone() {
        // managed + developed: 2 verbs (+4), tone phrase (+5)
        assert_eq!(score("Managed budgets. Developed tools."), 49);
    }

    #[test]
    fn test_verb_bonus_caps_at_thirty() {
        let lexicon = Lexicon::builtin().unwrap();
        let verbs: Vec<&str> = lexicon.action_verbs().iter().take(20).collect();
        let signals = WritingSignals {
            action_verbs: verbs.len(),
            ..Default::default()
        };
        assert_eq!(signals.score(), 70);
    }

    #[test]
    fn test_quantities_scan_cap() {
        let text = "10 20 30 40 50 60 70 80 90 11 12 13";
        let lexicon = Lexicon::builtin().unwrap();
        let signals = WritingSignals::collect(text, text, &lexicon);
        assert_eq!(signals.quantified_achievements, 10);
        // 40 + min(15, 20)
        assert_eq!(signals.score(), 55);
    }

    #[test]
    fn test_penalties() {
        // double space, repeated punctuation and first person
        assert_eq!(score("I wrote this  well..."), 40 - 3 - 3 - 5);
    }

    #[test]
    fn test_bullets_bonus() {
        assert_eq!(score("- first item\n- second item"), 50);
    }

    #[test]
    fn test_adding_a_verb_never_lowers_score() {
        let base = "Summary of work across teams";
        let more = "Summary of work across teams. Automated releases";
        assert!(score(more) >= score(base));
    }
}
