//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use crate::processing::CandidateResult;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter: ranking table followed by per-candidate analysis
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

const NAME_WIDTH: usize = 24;
const FILE_WIDTH: usize = 24;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn or_none(text: String) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
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

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 75.0 => Color::Green,
            s if s >= 50.0 => Color::Yellow,
            s if s > 0.0 => Color::BrightRed,
            _ => Color::Red,
        }
    }

    fn format_score(&self, score: f64) -> String {
        self.colorize(&format!("{:.2}%", score), Self::score_color(score))
    }

    fn format_candidate(&self, output: &mut String, candidate: &CandidateResult, report: &ScreeningReport) {
        output.push_str(&self.format_header(&format!("Analysis for: {}", candidate.name), 3));
        let _ = writeln!(output, "File: {}", candidate.source_file_name);
        let _ = writeln!(output, "Match Score: {}", self.format_score(candidate.score));

        if candidate.matching_skills.is_empty() {
            let _ = writeln!(output, "{}", self.colorize("⚠️  No matching skills found.", Color::Yellow));
        } else {
            let _ = writeln!(
                output,
                "Matching Skills: {}",
                self.colorize(&candidate.matching_skills.to_string(), Color::Cyan)
            );
        }

        if self.detailed {
            let missing = report.job_skills.difference(&candidate.resume_skills);
            let extra = candidate.resume_skills.difference(&report.job_skills);
            let _ = writeln!(output, "Missing Skills: {}", or_none(missing.to_string()));
            let _ = writeln!(output, "Other Resume Skills: {}", or_none(extra.to_string()));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🔎 RESUME SCREENING RESULTS", 1));
        let _ = writeln!(
            output,
            "Generated: {} | Processing time: {}ms",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        );
        let _ = writeln!(output, "Job description: {}", report.metadata.job_source);
        let _ = writeln!(output, "Job skills: {}", or_none(report.job_skills.to_string()));
        if report.job_skills.is_empty() {
            let _ = writeln!(
                output,
                "{}",
                self.colorize("⚠️  No known skills in the job description; every score is 0.", Color::Yellow)
            );
        }

        for skipped in &report.skipped {
            let _ = writeln!(
                output,
                "{}",
                self.colorize(&format!("⚠️  Skipped {}: {}", skipped.file_name, skipped.reason), Color::Yellow)
            );
        }

        output.push_str(&self.format_header("Ranking of Candidates", 2));
        if report.candidates.is_empty() {
            output.push_str("No candidates screened.\n");
            return Ok(output);
        }

        let _ = writeln!(
            output,
            "{:<4} {:<name$} {:>8}  {:<file$} {}",
            "#",
            "Candidate Name",
            "Score",
            "File Name",
            "Matching Skills",
            name = NAME_WIDTH,
            file = FILE_WIDTH
        );
        for (rank, candidate) in report.candidates.iter().enumerate() {
            // Pad before colouring so escape codes do not break alignment
            let score = format!("{:>8}", format!("{:.2}%", candidate.score));
            let _ = writeln!(
                output,
                "{:<4} {:<name$} {}  {:<file$} {}",
                rank + 1,
                truncate(&candidate.name, NAME_WIDTH),
                self.colorize(&score, Self::score_color(candidate.score)),
                truncate(&candidate.source_file_name, FILE_WIDTH),
                or_none(candidate.matching_skills.to_string()),
                name = NAME_WIDTH,
                file = FILE_WIDTH
            );
        }

        let uncovered = report.uncovered_skills();
        if !uncovered.is_empty() {
            let _ = writeln!(
                output,
                "\nJob skills no candidate has: {}",
                self.colorize(&uncovered.to_string(), Color::Yellow)
            );
        }

        output.push_str(&self.format_header("Detailed Candidate Analysis", 2));
        for candidate in &report.candidates {
            self.format_candidate(&mut output, candidate, report);
        }

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
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
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
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Screening Results\n\n");
        if self.include_metadata {
            let _ = writeln!(output, "- **Generated:** {}", report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
            let _ = writeln!(output, "- **Job description:** {}", report.metadata.job_source);
            let _ = writeln!(output, "- **Tokenizer:** {}", report.metadata.tokenizer_backend);
            let _ = writeln!(output, "- **Screener version:** {}", report.metadata.screener_version);
        }
        let _ = writeln!(output, "- **Job skills:** {}\n", or_none(report.job_skills.to_string()));

        if !report.skipped.is_empty() {
            output.push_str("## Skipped Files\n\n");
            for skipped in &report.skipped {
                let _ = writeln!(output, "- `{}`: {}", skipped.file_name, skipped.reason);
            }
            output.push('\n');
        }

        output.push_str("## Ranking of Candidates\n\n");
        output.push_str("| # | Candidate Name | Match Score | File Name | Matching Skills |\n");
        output.push_str("|---|---|---:|---|---|\n");
        for (rank, candidate) in report.candidates.iter().enumerate() {
            let _ = writeln!(
                output,
                "| {} | {} | {:.2}% | {} | {} |",
                rank + 1,
                Self::escape(&candidate.name),
                candidate.score,
                Self::escape(&candidate.source_file_name),
                candidate.matching_skills
            );
        }

        let uncovered = report.uncovered_skills();
        if !report.candidates.is_empty() && !uncovered.is_empty() {
            let _ = writeln!(output, "\n**Job skills no candidate has:** {}", uncovered);
        }

        output.push_str("\n## Detailed Candidate Analysis\n");
        for candidate in &report.candidates {
            let _ = writeln!(output, "\n### Analysis for: {}\n", candidate.name);
            let _ = writeln!(output, "**Match Score:** {:.2}%\n", candidate.score);
            if candidate.matching_skills.is_empty() {
                output.push_str("> No matching skills found.\n");
            } else {
                let _ = writeln!(output, "**Matching Skills:** `{}`", candidate.matching_skills);
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
