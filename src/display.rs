//! Terminal UI for the symptom checker
//!
//! Manages the banner, progress bar, and color-coded result output.
//! Performance target: 10 FPS progress updates

use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::kb::Severity;
use crate::triage::{RankedCondition, RedFlagResult, ScoredCondition, TriageOutcome};

/// Display manager for terminal output
///
/// Features:
/// - Welcome banner and interview intro
/// - Analysis progress bar
/// - Severity-colored condition listing
/// - Red-flag warning block
pub struct DisplayManager {
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
    update_interval: Duration,
}

impl DisplayManager {
    /// Create new display manager
    ///
    /// Update frequency: 10 FPS (100ms interval)
    pub fn new() -> Self {
        DisplayManager {
            multi_progress: MultiProgress::new(),
            current_bar: None,
            update_interval: Duration::from_millis(100), // 10 FPS
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  SymptomBuddy {} - Symptom Checker", version);
        let info = "  Not a medical diagnosis. For emergencies call your local number.";
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
    }

    /// Explain the questionnaire before the first question
    pub fn show_intro(&self, total_questions: usize) {
        println!(
            "Answer {} yes/no questions. Accepted answers: {} / {}.",
            total_questions.to_string().bold(),
            "yes, y, 1, true".green(),
            "no, n, 0, false".green()
        );
        println!("{}\n", "Press Ctrl-C at any time to abort.".dimmed());
    }

    /// Create progress bar for the analysis stage
    pub fn start_analysis(&mut self) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(100));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Analyzing... [{bar:40.cyan/blue}] {pos}% | {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message("Scoring conditions".to_string());
        pb.enable_steady_tick(self.update_interval);

        self.current_bar = Some(pb.clone());
        pb
    }

    /// Update progress bar
    pub fn update_progress(&self, pb: &ProgressBar, progress: f64, message: Option<&str>) {
        let pos = (progress * 100.0).round() as u64;
        pb.set_position(pos);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    /// Finish current progress bar
    pub fn finish_current(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Display the ranked shortlist with severity colors
    pub fn show_ranked(&self, ranked: &[RankedCondition]) {
        self.show_section("Top 3 Possible Conditions");

        if ranked.is_empty() {
            println!("  {}", "No conditions matched your answers.".dimmed());
            return;
        }

        for (index, condition) in ranked.iter().enumerate() {
            let severity = self.paint_severity(condition.severity);
            println!(
                "  {}. {} {} {}",
                (index + 1).to_string().cyan(),
                condition.name.bold(),
                format!("approx. {:.1}%", condition.confidence).dimmed(),
                format!("({})", severity)
            );
            println!("     {}", condition.advice);
        }
    }

    /// Display every condition's raw score in rule order. Verbose mode
    /// only.
    pub fn show_score_table(&self, scored: &[ScoredCondition]) {
        self.show_section("All Condition Scores");
        for condition in scored {
            println!(
                "  {:<32} {:>5.1} / {:<5.1} {}",
                condition.name,
                condition.raw_score,
                condition.max_possible,
                format!("({})", condition.severity).dimmed()
            );
        }
    }

    /// Display the red-flag warning block, if any trigger fired
    pub fn show_red_flags(&self, result: &RedFlagResult) {
        if !result.urgent() {
            return;
        }

        println!("\n{}", "!! URGENT WARNING !!".red().bold());
        for hit in &result.hits {
            println!("  {} {}", "•".red(), hit.description.red());
        }
        println!(
            "{}",
            "Please seek immediate medical attention.".red().bold()
        );
    }

    /// Display the full outcome: shortlist then red flags
    pub fn show_results(&self, outcome: &TriageOutcome) {
        self.show_ranked(&outcome.ranked);
        self.show_red_flags(&outcome.red_flags);
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show completion with stats
    pub fn show_completion_stats(&self, duration_ms: u64, answered: usize, affirmed: usize) {
        let duration_str = if duration_ms > 1000 {
            format!("{:.1}s", duration_ms as f64 / 1000.0)
        } else {
            format!("{}ms", duration_ms)
        };

        println!(
            "\n{} {} | Time: {} | Questions: {} | Yes answers: {}",
            "✓".green(),
            "Check complete".bold(),
            duration_str.dimmed(),
            answered.to_string().dimmed(),
            affirmed.to_string().dimmed()
        );
        println!();
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    fn paint_severity(&self, severity: Severity) -> ColoredString {
        match severity {
            Severity::Low => severity.as_str().green(),
            Severity::Medium => severity.as_str().yellow(),
            Severity::High => severity.as_str().red(),
            Severity::Critical => severity.as_str().red().bold(),
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
