//! Text normalization and simple counting helpers

/// Input text as seen by every scorer.
///
/// `original` keeps its casing for contact extraction; `lower` is folded
/// once so lexicon lookups never repeat the work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub original: String,
    pub lower: String,
}

impl NormalizedText {
    /// Trim the input; a missing or blank input becomes the empty string.
    pub fn new(raw: Option<&str>) -> Self {
        let original = raw.map(str::trim).unwrap_or_default().to_string();
        let lower = original.to_lowercase();
        Self { original, lower }
    }

    pub fn is_blank(&self) -> bool {
        self.original.is_empty()
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines with at least one non-whitespace character
pub fn non_empty_line_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
