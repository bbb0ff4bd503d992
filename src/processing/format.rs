//! Format and structure rubric

use crate::lexicon::patterns::count_capped;
use crate::lexicon::Lexicon;
use crate::processing::clamp_score;
use crate::processing::text_processor::{non_empty_line_count, word_count};
use serde::{Deserialize, Serialize};

pub(crate) const BULLET_SCAN_CAP: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatSignals {
    pub word_count: usize,
    pub bullet_count: usize,
    pub section_count: usize,
    pub words_per_line: f64,
    pub has_excessive_blank_lines: bool,
    pub has_dates: bool,
}

impl FormatSignals {
    pub fn collect(text: &str, lower: &str, lexicon: &Lexicon) -> Self {
        let patterns = lexicon.patterns();
        let words = word_count(text);
        let lines = non_empty_line_count(text).max(1);

        Self {
            word_count: words,
            bullet_count: count_capped(&patterns.bullet, text, BULLET_SCAN_CAP),
            section_count: lexicon.section_headers().count_substrings(lower),
            words_per_line: words as f64 / lines as f64,
            has_excessive_blank_lines: text.contains("\n\n\n\n"),
            has_dates: patterns.date.is_match(text),
        }
    }

    pub fn score(&self) -> u8 {
        let mut score = 15;

        score += length_points(self.word_count);

        score += match self.bullet_count {
            8..=30 => 20,
            n if n >= 5 => 15,
            n if n >= 3 => 10,
            _ => 0,
        };

        score += match self.section_count {
            n if n >= 5 => 20,
            4 => 15,
            3 => 10,
            2 => 5,
            _ => 0,
        };

        score += if (5.0..=15.0).contains(&self.words_per_line) {
            10
        } else if (3.0..=20.0).contains(&self.words_per_line) {
            5
        } else {
            0
        };

        if !self.has_excessive_blank_lines {
            score += 5;
        }

        if self.has_dates {
            score += 10;
        }

        let consistent = self.bullet_count > 0
            && self.section_count >= 3
            && (250..=900).contains(&self.word_count);
        if consistent {
            score += 10;
        }

        clamp_score(score)
    }
}

/// Points for document length; bands are checked in priority order.
fn length_points(words: usize) -> i32 {
    if (300..=800).contains(&words) {
        20
    } else if (200..=1000).contains(&words) {
        15
    } else if (150..=1200).contains(&words) {
        10
    } else if words < 100 {
        -10
    } else if words > 1500 {
        -5
    } else {
        0
    }
}

/// Score layout and structure. Blank text gets the floor of 5.
pub fn score_format(text: &str, lower: &str, lexicon: &Lexicon) -> u8 {
    if text.trim().is_empty() {
        return 5;
    }
    FormatSignals::collect(text, lower, lexicon).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        score_format(text, &text.to_lowercase(), &Lexicon::builtin().unwrap())
    }

    #[test]
    fn test_blank_floor() {
        assert_eq!(score(""), 5);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(length_points(500), 20);
        assert_eq!(length_points(250), 15);
        assert_eq!(length_points(900), 15);
        assert_eq!(length_points(160), 10);
        assert_eq!(length_points(1100), 10);
        assert_eq!(length_points(50), -10);
        assert_eq!(length_points(120), 0);
        assert_eq!(length_points(1300), 0);
        assert_eq!(length_points(2000), -5);
    }

    #[test]
    fn test_short_single_line() {
        // 4 words on one line: -10 length, ratio 4 gives +5, no blank runs +5
        assert_eq!(score("just four short words"), 15 - 10 + 5 + 5);
    }

    #[test]
    fn test_excessive_blank_lines_lose_bonus() {
        let tight = "alpha beta gamma delta epsilon\nzeta eta theta iota kappa";
        let loose = "alpha beta gamma delta epsilon\n\n\n\nzeta eta theta iota kappa";
        assert_eq!(score(tight), score(loose) + 5);
    }

    #[test]
    fn test_bullet_tiers() {
        let tier = |bullets| FormatSignals { bullet_count: bullets, ..Default::default() }.score();
        let none = tier(0);
        assert_eq!(tier(3), none + 10);
        assert_eq!(tier(5), none + 15);
        assert_eq!(tier(8), none + 20);
        assert_eq!(tier(30), none + 20);
        assert_eq!(tier(31), none + 15);
    }

    #[test]
    fn test_consistency_bonus() {
        let signals = FormatSignals {
            word_count: 400,
            bullet_count: 10,
            section_count: 5,
            words_per_line: 8.0,
            has_excessive_blank_lines: false,
            has_dates: true,
        };
        // 15 + 20 + 20 + 20 + 10 + 5 + 10 + 10
        assert_eq!(signals.score(), 100);
    }
}
