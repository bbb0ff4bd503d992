//! Output formatters - console, JSON, Markdown and HTML presentation of a report

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::*;
use crate::processing::details::{CheckMark, ScoreRating};
use crate::processing::suggestions::{render_suggestions, SuggestionPriority};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
    detailed: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body { font: 15px/1.55 system-ui, sans-serif; color: #24292f; background: #f3f4f6; margin: 0; }
        main { max-width: 860px; margin: 24px auto; background: #fff; padding: 28px 32px; border-radius: 6px; }
        header { border-bottom: 2px solid #4b5563; margin-bottom: 24px; }
        h2 { font-size: 1.15em; text-transform: uppercase; letter-spacing: .04em; color: #4b5563; }
        .rating { padding: 3px 12px; border-radius: 12px; font-size: .8em; color: #fff; margin-left: 8px; }
        .rating-outstanding, .rating-excellent { background: #15803d; }
        .rating-good { background: #0e7490; }
        .rating-fair, .rating-below-average { background: #b45309; }
        .rating-needs-work { background: #b91c1c; }
        .rubrics { display: flex; flex-wrap: wrap; gap: 12px; }
        .rubric { flex: 1 1 170px; border: 1px solid #e5e7eb; border-radius: 6px; padding: 10px 14px; }
        .rubric meter { width: 100%; }
        .suggestion { margin: 4px 0; padding: 4px 10px; border-left: 4px solid #9ca3af; }
        .critical { border-color: #b91c1c; }
        .important { border-color: #b45309; }
        .recommended { border-color: #0e7490; }
        .positive { border-color: #15803d; }
        .detail pre { background: #f9fafb; padding: 10px; white-space: pre-wrap; }
        footer { margin-top: 28px; font-size: .85em; color: #6b7280; }
    </style>
    {% endif %}
</head>
<body>
    <main>
        <header>
            <h1>Resume Analysis Report</h1>
            <p>Generated {{ generated_at }} in {{ processing_time }}ms</p>
        </header>

        <section>
            <h2>Summary</h2>
            <h3>Overall Score: {{ overall_score }}% <span class="rating {{ score_class }}">{{ score_label }}</span></h3>
            <p>{{ verdict }}</p>

            <div class="rubrics">
                {% for component in components %}
                <div class="rubric">
                    <strong>{{ component.label }}</strong>: {{ component.score }}%
                    <meter min="0" max="100" low="50" high="70" optimum="100" value="{{ component.score }}"></meter>
                    <small>weight {{ component.weight }}%</small>
                </div>
                {% endfor %}
            </div>
        </section>

        <section>
            <h2>Contact Information</h2>
            {% if has_contact %}
            <ul>
                {% for entry in contact %}
                <li><strong>{{ entry.label }}:</strong> {{ entry.value }}</li>
                {% endfor %}
            </ul>
            {% else %}
            <p>No contact details found.</p>
            {% endif %}
        </section>

        <section>
            <h2>Suggestions</h2>
            {% for suggestion in suggestions %}
            <div class="suggestion {{ suggestion.class }}">{{ suggestion.text }}</div>
            {% endfor %}
        </section>

        {% if detailed %}
        <section>
            <h2>Detailed Analysis</h2>
            {% for detail in details %}
            <div class="detail">
                <h3>{{ detail.label }} ({{ detail.score }}%)</h3>
                <pre>{{ detail.body }}</pre>
            </div>
            {% endfor %}
        </section>
        {% endif %}

        <footer>
            Resume Analyzer v{{ version }} | {{ resume_file }} | {{ word_count }} words
        </footer>
    </main>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    detailed: bool,
    generated_at: String,
    processing_time: u64,
    overall_score: u8,
    score_class: String,
    score_label: String,
    verdict: String,
    components: Vec<HtmlComponent>,
    has_contact: bool,
    contact: Vec<HtmlContact>,
    suggestions: Vec<HtmlSuggestion>,
    details: Vec<HtmlDetail>,
    version: String,
    resume_file: String,
    word_count: usize,
}

struct HtmlComponent {
    label: String,
    score: u8,
    weight: u32,
}

struct HtmlContact {
    label: String,
    value: String,
}

struct HtmlSuggestion {
    class: String,
    text: String,
}

struct HtmlDetail {
    label: String,
    score: u8,
    body: String,
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report
        .metadata
        .generated_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=100 => Color::Green,
            70..=79 => Color::Yellow,
            50..=69 => Color::BrightYellow,
            _ => Color::Red,
        }
    }

    fn format_score_badge(&self, rating: ScoreRating, score: u8) -> String {
        let badge = rating.label().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(Self::score_color(score)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_score_bar(&self, score: u8) -> String {
        let filled = (score as usize + 5) / 10;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(10 - filled));
        self.colorize(&bar, Self::score_color(score))
    }

    fn priority_color(priority: SuggestionPriority) -> Color {
        match priority {
            SuggestionPriority::Critical => Color::Red,
            SuggestionPriority::Important => Color::Yellow,
            SuggestionPriority::Recommended => Color::White,
            SuggestionPriority::Positive => Color::Green,
        }
    }

    fn check_color(mark: CheckMark) -> Color {
        match mark {
            CheckMark::Pass => Color::Green,
            CheckMark::Fail => Color::Red,
            CheckMark::Neutral => Color::BrightBlack,
            CheckMark::Warning => Color::Yellow,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            summary.overall_score,
            self.format_score_badge(summary.rating, summary.overall_score)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&summary.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for component in &summary.breakdown {
            output.push_str(&format!(
                "  {:<20} {} {:>3}% (weight: {}%)\n",
                component.rubric.label(),
                self.format_score_bar(component.score),
                component.score,
                component.weight
            ));
        }

        output.push_str(&self.format_header("Contact Information", 3));
        if report.contact.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("No contact details found", Color::Red)));
        } else {
            for (field, value) in report.contact.iter() {
                output.push_str(&format!("  {:<9} {}\n", format!("{}:", field.label()), value));
            }
        }

        output.push_str(&self.format_header("Suggestions", 2));
        if self.use_colors {
            for suggestion in &report.suggestions {
                output.push_str(&format!(
                    "{}\n",
                    self.colorize(&suggestion.to_string(), Self::priority_color(suggestion.priority))
                ));
            }
        } else {
            output.push_str(&render_suggestions(&report.suggestions));
            output.push('\n');
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 2));
            for detail in &report.details {
                output.push_str(&self.format_header(
                    &format!("{} ({}%)", detail.rubric.label(), detail.score),
                    3,
                ));
                if let Some(rating) = &detail.rating {
                    output.push_str(&format!("{}\n", self.colorize(rating, Self::score_color(detail.score))));
                }
                for (label, value) in &detail.facts {
                    output.push_str(&format!("  {}: {}\n", label, value));
                }
                for check in &detail.checks {
                    output.push_str(&format!(
                        "  {} {}\n",
                        self.colorize(check.mark.symbol(), Self::check_color(check.mark)),
                        check.text
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{} Resume Analyzer v{} | {} words analyzed\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.analyzer_version,
            report.metadata.word_count
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Outstanding",
            80..=89 => "🟢 Excellent",
            70..=79 => "🟡 Good",
            60..=69 => "🟠 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Needs Work",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("# Resume Analysis Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Words:** {}\n\n",
                resume_name, report.metadata.word_count
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            summary.overall_score,
            Self::markdown_score_badge(summary.overall_score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", summary.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        for component in &summary.breakdown {
            output.push_str(&format!(
                "| {} | {}% | {}% |\n",
                component.rubric.label(),
                component.score,
                component.weight
            ));
        }
        output.push('\n');

        output.push_str("### Contact Information\n\n");
        if report.contact.is_empty() {
            output.push_str("_No contact details found._\n\n");
        } else {
            for (field, value) in report.contact.iter() {
                output.push_str(&format!("- **{}:** {}\n", field.label(), value));
            }
            output.push('\n');
        }

        output.push_str("## Suggestions\n\n");
        for suggestion in &report.suggestions {
            output.push_str(&format!("- {}\n", suggestion.text));
        }
        output.push('\n');

        if self.detailed {
            output.push_str("## Detailed Analysis\n\n");
            for detail in &report.details {
                output.push_str(&format!("### {} ({}%)\n\n", detail.rubric.label(), detail.score));
                if let Some(rating) = &detail.rating {
                    output.push_str(&format!("**Rating:** {}\n\n", rating));
                }
                for (label, value) in &detail.facts {
                    output.push_str(&format!("- {}: **{}**\n", label, value));
                }
                if !detail.facts.is_empty() {
                    output.push('\n');
                }
                for check in &detail.checks {
                    output.push_str(&format!("- {} {}\n", check.mark.symbol(), check.text));
                }
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "---\n\n*Generated by Resume Analyzer v{}*\n",
            report.metadata.analyzer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, detailed: bool) -> Self {
        Self {
            include_styles,
            detailed,
        }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let summary = &report.summary;
        let score_class = format!(
            "rating-{}",
            summary.rating.label().to_lowercase().replace(' ', "-")
        );

        let components = summary
            .breakdown
            .iter()
            .map(|c| HtmlComponent {
                label: c.rubric.label().to_string(),
                score: c.score,
                weight: c.weight,
            })
            .collect();

        let contact: Vec<HtmlContact> = report
            .contact
            .iter()
            .map(|(field, value)| HtmlContact {
                label: field.label().to_string(),
                value: value.to_string(),
            })
            .collect();

        let suggestions = report
            .suggestions
            .iter()
            .map(|s| HtmlSuggestion {
                class: match s.priority {
                    SuggestionPriority::Critical => "critical",
                    SuggestionPriority::Important => "important",
                    SuggestionPriority::Recommended => "recommended",
                    SuggestionPriority::Positive => "positive",
                }
                .to_string(),
                text: s.text.clone(),
            })
            .collect();

        let details = report
            .details
            .iter()
            .map(|d| HtmlDetail {
                label: d.rubric.label().to_string(),
                score: d.score,
                body: d.to_string(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            detailed: self.detailed,
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            overall_score: summary.overall_score,
            score_class,
            score_label: summary.rating.label().to_string(),
            verdict: summary.verdict.clone(),
            components,
            has_contact: !contact.is_empty(),
            contact,
            suggestions,
            details,
            version: report.metadata.analyzer_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            word_count: report.metadata.word_count,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
            html_formatter: HtmlFormatter::new(include_html_styles, detailed),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
