//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use crate::input::file_detector::FileType;
use crate::lexicon::LexiconSet;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Offline resume scoring tool")]
#[command(long_about = "Score a resume for ATS compatibility, skills coverage, writing quality and format, with prioritized suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include per-rubric breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Custom lexicon file (TOML) overriding the configured one
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
    },

    /// Inspect the built-in word lists
    Lexicon {
        /// Print every entry of one list
        #[arg(long, value_enum)]
        show: Option<LexiconSet>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.ats_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Check that the resume is in a format text can be extracted from
pub fn check_resume_file(path: &Path) -> Result<(), String> {
    match FileType::from_path(path) {
        FileType::Word => Err(format!(
            "Word documents cannot be read: export {} to PDF or plain text",
            path.display()
        )),
        file_type if !file_type.is_supported() => Err(format!(
            "Unsupported file type: {}. Allowed: pdf, txt, md",
            path.display()
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "resume-analyzer",
            "analyze",
            "--resume",
            "cv.pdf",
            "--output",
            "json",
            "--detailed",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                resume,
                output,
                detailed,
                save,
                lexicon,
            } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(detailed);
                assert!(save.is_none());
                assert!(lexicon.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_lexicon_show_value() {
        let cli = Cli::try_parse_from(["resume-analyzer", "lexicon", "--show", "action-verbs"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Lexicon {
                show: Some(LexiconSet::ActionVerbs)
            }
        ));
    }

    #[test]
    fn test_check_resume_file() {
        assert!(check_resume_file(Path::new("a.PDF")).is_ok());
        assert!(check_resume_file(Path::new("cv.md")).is_ok());
        assert!(check_resume_file(Path::new("README")).is_err());

        let word = check_resume_file(Path::new("cv.docx")).unwrap_err();
        assert!(word.contains("export cv.docx to PDF"));
        let odt = check_resume_file(Path::new("cv.odt")).unwrap_err();
        assert!(odt.starts_with("Unsupported file type"));
    }
}
