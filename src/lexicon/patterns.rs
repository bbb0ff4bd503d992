//! Compiled text patterns

use crate::error::Result;
use regex::Regex;

/// All regular expressions the scorers need, compiled once per registry.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
    pub url: Regex,
    pub bullet: Regex,
    pub date: Regex,
    pub quantity: Regex,
    pub repeated_punctuation: Regex,
    pub first_person: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phone: Regex::new(
                r"(?:\+?\d{1,3}[\s.-]?)?(?:\(?\d{2,5}\)?[\s.-]?)?\d{3,4}[\s.-]?\d{4}\b",
            )?,
            linkedin: Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/([A-Za-z0-9\-_%]+)")?,
            github: Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9\-_%]+)")?,
            url: Regex::new(r"(?i)https?://[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?:/\S*)?")?,
            bullet: Regex::new(r"(?m)^\s*[•●■▪▸►⦿⦾∙◦‣⁃\-]\s+")?,
            date: Regex::new(concat!(
                r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}\b",
                r"|\b\d{4}\s*[-–—]\s*(?:\d{4}|present|current)\b",
            ))?,
            quantity: Regex::new(r"\b\d+%|\$\d+|\d+\+|\d{2,}\b")?,
            repeated_punctuation: Regex::new(r"[,.!?]{2,}")?,
            // Deliberately loose: matches "I " and "i " after any word boundary.
            first_person: Regex::new(r"\b(I|i) ")?,
        })
    }
}

/// Count matches of `regex` in `text`, stopping once `cap` is reached.
pub fn count_capped(regex: &Regex, text: &str, cap: usize) -> usize {
    regex.find_iter(text).take(cap).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::compile().unwrap()
    }

    #[test]
    fn test_bullet_markers() {
        let p = patterns();
        let text = "• Built things\n- Shipped things\n  ▪ Tested things\n-not a bullet\nplain line";
        assert_eq!(p.bullet.find_iter(text).count(), 3);
    }

    #[test]
    fn test_date_ranges() {
        let p = patterns();
        assert!(p.date.is_match("Jan 2020 - Dec 2022"));
        assert!(p.date.is_match("September. 2019"));
        assert!(p.date.is_match("2018 – Present"));
        assert!(p.date.is_match("2015-2019"));
        assert!(p.date.is_match("2021 - current"));
        assert!(!p.date.is_match("in 2020 we grew"));
        assert_eq!(p.date.find_iter("Jan 2020 - Dec 2022").count(), 2);
    }

    #[test]
    fn test_quantity_markers() {
        let p = patterns();
        let text = "Cut costs by 25% saving $4000 for 3+ teams across 12 regions in 5 days";
        let found: Vec<&str> = p.quantity.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["25%", "$4000", "3+", "12"]);
    }

    #[test]
    fn test_repeated_punctuation() {
        let p = patterns();
        assert!(p.repeated_punctuation.is_match("Wait..."));
        assert!(p.repeated_punctuation.is_match("Really?!"));
        assert!(!p.repeated_punctuation.is_match("One. Two, three!"));
    }

    #[test]
    fn test_first_person_is_a_loose_heuristic() {
        let p = patterns();
        assert!(p.first_person.is_match("I led the team"));
        assert!(p.first_person.is_match("so i shipped it"));
        assert!(!p.first_person.is_match("Led the team"));
        assert!(!p.first_person.is_match("It worked"));
    }

    #[test]
    fn test_count_capped_stops_at_cap() {
        let p = patterns();
        let text = "10 20 30 40 50 60";
        assert_eq!(count_capped(&p.quantity, text, 4), 4);
        assert_eq!(count_capped(&p.quantity, text, 10), 6);
    }
}
