//! Integration tests for the resume analyzer

use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::InputManager;
use resume_analyzer::output::{AnalysisReport, ReportGenerator};
use resume_analyzer::processing::contact::ContactField;
use resume_analyzer::{AnalysisEngine, Lexicon};
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    // but bullets and link targets survive
    assert!(text.contains("- Led team of six engineers"));
    assert!(text.contains("https://github.com/johndoe"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());

    // the analyze path keeps going with an empty document
    let text = manager.extract_text_or_empty(path).await;
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unreadable_resume_scores_as_blank() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text_or_empty(Path::new("tests/fixtures/unsupported.xyz"))
        .await;

    let result = AnalysisEngine::default().analyze(&text);
    assert_eq!(result.overall_score, 5);
    assert_eq!(result.ats_score, 5);
    assert_eq!(result.skills_score, 0);
    assert_eq!(result.grammar_score, 10);
    assert_eq!(result.format_score, 5);
}

#[tokio::test]
async fn test_end_to_end_text_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::default();
    let result = engine.analyze(&text);

    assert!(result.overall_score >= 75, "overall {}", result.overall_score);
    assert_eq!(
        result.contact.get(ContactField::Email),
        Some("john.doe@example.com")
    );
    assert_eq!(result.contact.get(ContactField::Phone), Some("(555) 123-4567"));
    assert_eq!(
        result.contact.get(ContactField::Linkedin),
        Some("https://linkedin.com/in/johndoe")
    );
    assert_eq!(
        result.contact.get(ContactField::Github),
        Some("https://github.com/johndoe")
    );

    let report = AnalysisReport::from_analysis(&result, &engine, 8, "sample_resume.txt", 1);
    assert!(!report.suggestions.is_empty());
    assert!(report.suggestions.len() <= 8);
    assert!(report.weakest_rubrics().is_empty());
}

#[tokio::test]
async fn test_end_to_end_markdown_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let result = AnalysisEngine::default().analyze(&text);
    assert!(result.contact.has(ContactField::Email));
    assert!(result.contact.has(ContactField::Linkedin));
    assert!(result.contact.has(ContactField::Github));
    assert!(result.skills_score > 0);
}

#[tokio::test]
async fn test_report_in_every_format() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::default();
    let result = engine.analyze(&text);
    let report = AnalysisReport::from_analysis(&result, &engine, 8, "sample_resume.txt", 1);
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let console = generator.generate_report(&report, OutputFormat::Console).unwrap();
    assert!(console.contains(&format!("Overall Score: {}%", result.overall_score)));

    let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["overall_score"], result.overall_score);
    assert_eq!(value["contact"]["email"], "john.doe@example.com");

    let markdown = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
    assert!(markdown.starts_with("# Resume Analysis Report"));

    let html = generator.generate_report(&report, OutputFormat::Html).unwrap();
    assert!(html.contains("<title>Resume Analysis Report</title>"));
}

#[test]
fn test_config_round_trip_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::load_from(&path).unwrap();
    assert!(path.exists());

    config.set_value("scoring.ats_weight", "40").unwrap();
    config.set_value("scoring.format_weight", "10").unwrap();
    config.set_value("output.format", "json").unwrap();
    config.validate().unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(reloaded.output.format, OutputFormat::Json);

    let engine = AnalysisEngine::from_config(&reloaded).unwrap();
    assert_eq!(engine.weights().ats, 40);
    assert_eq!(engine.weights().format, 10);
}

#[test]
fn test_custom_lexicon_from_config() {
    let text = "Sequenced genomes with bioinformatics pipelines in Nextflow";

    let standard = AnalysisEngine::default().analyze(text);
    assert_eq!(standard.skills_score, 0);

    let mut config = Config::default();
    config.lexicon.custom_lexicon = Some("tests/fixtures/lexicon.toml".into());
    let engine = AnalysisEngine::from_config(&config).unwrap();

    assert!(engine.lexicon().technical_skills().contains("nextflow"));
    // extend keeps the built-in entries
    assert!(engine.lexicon().technical_skills().contains("python"));
    assert!(engine.lexicon().action_verbs().contains("sequenced"));

    let custom = engine.analyze(text);
    assert!(custom.skills_score > standard.skills_score);
    assert!(custom.grammar_score > standard.grammar_score);
}

#[test]
fn test_malformed_lexicon_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, "technical_skills = \"not a list\"").unwrap();

    assert!(Lexicon::load(&path).is_err());
}
