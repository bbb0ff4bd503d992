//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::analyzer::ScoringWeights;
use crate::processing::suggestions::DEFAULT_SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub ats_weight: u32,
    pub skills_weight: u32,
    pub grammar_weight: u32,
    pub format_weight: u32,
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// TOML word lists replacing or extending the built-in lexicon
    pub custom_lexicon: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        };
        write!(f, "{}", name)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            ats_weight: weights.ats,
            skills_weight: weights.skills,
            grammar_weight: weights.grammar,
            format_weight: weights.format,
            max_suggestions: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            ats: self.ats_weight,
            skills: self.skills_weight,
            grammar: self.grammar_weight,
            format: self.format_weight,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there on first run
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!(
                    "Failed to parse config {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.weights().validate()?;
        if self.scoring.max_suggestions == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "scoring.max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a single value by dotted key, e.g. `scoring.ats_weight`.
    /// The result is not validated; weights are usually changed in pairs.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.ats_weight" => self.scoring.ats_weight = parse_value(key, value)?,
            "scoring.skills_weight" => self.scoring.skills_weight = parse_value(key, value)?,
            "scoring.grammar_weight" => self.scoring.grammar_weight = parse_value(key, value)?,
            "scoring.format_weight" => self.scoring.format_weight = parse_value(key, value)?,
            "scoring.max_suggestions" => self.scoring.max_suggestions = parse_value(key, value)?,
            "lexicon.custom_lexicon" => {
                self.lexicon.custom_lexicon = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeAnalyzerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_value(key, value)?,
            _ => {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeAnalyzerError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}
