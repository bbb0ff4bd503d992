//! Resume analyzer: offline resume scoring tool

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::InputManager;
use resume_analyzer::lexicon::LexiconSet;
use resume_analyzer::output::{save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator};
use resume_analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            save,
            detailed,
            lexicon,
        } => {
            let mut config = load_config(config_path)?;
            if lexicon.is_some() {
                config.lexicon.custom_lexicon = lexicon;
            }

            let format = match output {
                Some(name) => cli::parse_output_format(&name).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            analyze(&resume, &config, format, detailed, save.as_deref()).await?;
        }

        Commands::Lexicon { show } => {
            let config = load_config(config_path)?;
            let engine = AnalysisEngine::from_config(&config).context("Failed to build lexicon")?;
            let lexicon = engine.lexicon();

            match show {
                Some(set) => {
                    println!("{} ({} entries)\n", set, lexicon.set(set).len());
                    for phrase in lexicon.set(set).iter() {
                        println!("  {}", phrase);
                    }
                }
                None => {
                    println!("📚 Lexicon\n");
                    if let Some(path) = &config.lexicon.custom_lexicon {
                        println!("Custom lexicon: {}\n", path.display());
                    }
                    for set in LexiconSet::ALL {
                        println!("  • {:<16} {:>4} entries", set.to_string(), lexicon.set(set).len());
                    }
                    println!("\n💡 List entries with: resume-analyzer lexicon --show <set>");
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = load_config(config_path)?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                print!(
                    "{}",
                    toml::to_string_pretty(&config).context("Failed to render configuration")?
                );
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = load_config(config_path)?;
                config.set_value(&key, &value)?;
                config
                    .validate()
                    .with_context(|| format!("Rejected {} = {}", key, value))?;
                config
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

async fn analyze(
    resume: &Path,
    config: &Config,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    info!("Starting resume analysis: {}", resume.display());
    let started = Instant::now();

    if let Err(e) = cli::check_resume_file(resume) {
        warn!("{}; the resume will be scored as empty", e);
    }

    let engine = AnalysisEngine::from_config(config).context("Failed to initialize analysis engine")?;

    let spinner = (format == OutputFormat::Console && save.is_none()).then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    });

    if let Some(spinner) = &spinner {
        spinner.set_message("Extracting text...");
    }
    let mut input_manager = InputManager::new();
    let text = input_manager.extract_text_or_empty(resume).await;

    if let Some(spinner) = &spinner {
        spinner.set_message("Scoring resume...");
    }
    let scoring_engine = engine.clone();
    let result = tokio::task::spawn_blocking(move || scoring_engine.analyze(&text))
        .await
        .context("Scoring task failed")?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        "Analysis complete in {}ms: overall score {}",
        elapsed_ms, result.overall_score
    );

    let report = AnalysisReport::from_analysis(
        &result,
        &engine,
        config.scoring.max_suggestions,
        &resume.to_string_lossy(),
        elapsed_ms,
    );

    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed,
        config.output.pretty_json,
        true,
        true,
    );
    let content = generator.generate_report(&report, format)?;

    match save {
        Some(target) => {
            let path = resolve_save_path(target, resume, format);
            save_report_to_file(&content, &path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// A directory target gets a generated, timestamped file name
fn resolve_save_path(target: &Path, resume: &Path, format: OutputFormat) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        target.to_path_buf()
    }
}
