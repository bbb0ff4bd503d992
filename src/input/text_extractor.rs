//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten Markdown to plain lines. List items keep a `- ` marker and link
/// targets are kept next to their text so bullets and URLs stay visible to
/// the scorers.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut link_text = String::new();
    let mut in_link = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Item) => {
                start_line(&mut out);
                out.push_str("- ");
            }
            Event::Start(Tag::Link(_, _, _)) => {
                in_link = true;
                link_text.clear();
            }
            Event::End(Tag::Link(_, dest, _)) => {
                in_link = false;
                if !dest.is_empty() && link_text.trim() != &*dest {
                    out.push(' ');
                    out.push_str(&dest);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_link {
                    link_text.push_str(&text);
                }
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => start_line(&mut out),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::TableRow)
            | Event::End(Tag::TableHead) => start_line(&mut out),
            Event::End(Tag::TableCell) => out.push(' '),
            _ => {}
        }
    }

    out.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_keeps_structure() {
        let md = "# Jane Doe\n\n## Experience\n\n* Led migration\n* Reduced costs by 20%\n\nPlain *emphasis* text.";
        let text = markdown_to_text(md);
        assert_eq!(
            text,
            "Jane Doe\nExperience\n- Led migration\n- Reduced costs by 20%\nPlain emphasis text."
        );
    }

    #[test]
    fn test_markdown_link_targets_survive() {
        let text = markdown_to_text("[Portfolio](https://jane.dev) and <https://github.com/jane>");
        assert!(text.contains("Portfolio https://jane.dev"));
        // autolinks already show their target
        assert_eq!(text.matches("https://github.com/jane").count(), 1);
    }

    #[tokio::test]
    async fn test_plain_text_extractor() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, "Skills\nRust").unwrap();

        assert_eq!(PlainTextExtractor.extract(&path).await.unwrap(), "Skills\nRust");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_an_extraction_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, "not really a pdf").unwrap();

        let err = PdfExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::PdfExtraction(_)));
    }
}
