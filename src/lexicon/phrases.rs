//! Phrase sets matched in a single Aho-Corasick pass

use crate::error::Result;
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// A deduplicated, lower-cased set of phrases with a prebuilt matcher.
///
/// Two kinds of lookup are offered:
/// * whole-word lookup, where a phrase only counts when it is not glued to
///   surrounding word characters ("java" does not hit inside "javascript");
/// * plain substring lookup, used for section headers.
///
/// The boundary is only enforced on a side of the phrase that ends in a word
/// character, so entries such as `c++`, `c#` or `.net` are still found.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    phrases: Vec<String>,
    matcher: AhoCorasick,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Overlapping search needs the standard match kind so that "java"
        // and "javascript" are both reported for the same span.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrases)?;

        Ok(Self { phrases, matcher })
    }

    /// Distinct phrases that occur in `text` as whole words
    pub fn find_words<'a>(&'a self, text: &str) -> BTreeSet<&'a str> {
        let mut found = BTreeSet::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            let phrase = self.phrases[mat.pattern().as_usize()].as_str();
            if found.contains(phrase) {
                continue;
            }
            if is_word_bounded(text, mat.start(), mat.end()) {
                found.insert(phrase);
            }
        }

        found
    }

    /// Distinct phrases that occur anywhere in `text`
    pub fn find_substrings<'a>(&'a self, text: &str) -> BTreeSet<&'a str> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|mat| self.phrases[mat.pattern().as_usize()].as_str())
            .collect()
    }

    pub fn count_words(&self, text: &str) -> usize {
        self.find_words(text).len()
    }

    pub fn count_substrings(&self, text: &str) -> usize {
        self.find_substrings(text).len()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases
            .binary_search_by(|p| p.as_str().cmp(phrase))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check that a match is not embedded inside a longer word.
///
/// Looser than a regex `\b...\b`: a boundary is only required on an edge
/// whose character is a word character, so "c++" and "c#" still match when
/// followed by a space, where `\bc\+\+\b` never would.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let starts_with_word = matched.chars().next().is_some_and(is_word_char);
    let ends_with_word = matched.chars().next_back().is_some_and(is_word_char);

    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    let left_ok = !starts_with_word || !before.is_some_and(is_word_char);
    let right_ok = !ends_with_word || !after.is_some_and(is_word_char);

    left_ok && right_ok
}
