//! SymptomBuddy - Main CLI Entry Point

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use symptombuddy::{
    cli::{Args, Commands},
    config::Config,
    display::DisplayManager,
    doctor::Doctor,
    interview::{Interviewer, InterviewSession},
    kb::KnowledgeBase,
    report::{format_report, ReportWriter},
    triage::{self, RankerConfig},
    CheckerError,
};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), message.red());
        std::process::exit(2);
    }

    let config = load_config(&args)?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::About) => {
            show_about();
        }
        Some(Commands::Kb { json }) => {
            show_kb(*json)?;
        }
        Some(Commands::Doctor) => {
            run_doctor(&config)?;
        }
        Some(Commands::Config) => {
            show_config(&args, &config);
        }
        None => {
            run_check(&args, &config)?;
        }
    }

    Ok(())
}

/// Load config, preferring an explicit --config path.
///
/// An explicit path that fails is a hard error; the implicit default
/// location falls back to defaults with a warning.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from(path);
    }

    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "{} {}",
                "Warning:".yellow().bold(),
                format!("Could not load config ({}); using defaults", e).yellow()
            );
            Ok(Config::default())
        }
    }
}

/// Run the interactive questionnaire end to end
fn run_check(args: &Args, config: &Config) -> Result<()> {
    let kb = KnowledgeBase::builtin();

    // Refuse to interview against inconsistent rule tables
    let issues = kb.validate();
    if !issues.is_empty() {
        let summary: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        return Err(CheckerError::KbIntegrity(summary.join("; ")).into());
    }

    let verbosity = args.verbosity();
    let mut display = DisplayManager::new();

    if verbosity.show_progress() {
        display.show_banner(env!("CARGO_PKG_VERSION"));
        display.show_intro(kb.symptoms.len());
    }

    let mut session = InterviewSession::new();
    let mut interviewer = Interviewer::new()?;

    let answers = match interviewer.collect(&kb, &mut session) {
        Ok(answers) => answers,
        Err(e) => {
            display.show_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if verbosity.show_timings() {
        display.show_info(&format!(
            "Interview finished in {:.1}s",
            session.elapsed().as_secs_f64()
        ));
    }

    let ranker_config = RankerConfig {
        top_n: 3,
        matched_only: args.matched_only || config.triage.matched_only,
    };

    let outcome = if verbosity.show_progress() {
        let pb = display.start_analysis();
        let outcome = triage::run(&kb, &answers, ranker_config);
        display.update_progress(&pb, 1.0, Some("Done"));
        display.finish_current();
        outcome
    } else {
        triage::run(&kb, &answers, ranker_config)
    };

    display.show_results(&outcome);
    if verbosity.show_score_table() {
        display.show_score_table(&outcome.scored);
    }

    if !args.no_report {
        let mut opts = config.report_options();
        if let Some(width) = args.width {
            opts.width = width;
        }

        // The report is stamped when it is written, not when the interview began
        let content = format_report(
            &kb,
            &answers,
            &outcome,
            &session.reference(),
            Local::now(),
            &opts,
        );

        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.report.filename));

        match ReportWriter::new(path).write(&content) {
            Ok(written) => {
                if verbosity.show_progress() {
                    display.show_info(&format!("Report saved to {}", written.display()));
                }
            }
            Err(e) => {
                // A failed report write does not invalidate the check
                display.show_warning(&e.to_string());
            }
        }
    }

    if verbosity.show_progress() {
        display.show_completion_stats(
            session.elapsed().as_millis() as u64,
            session.answered(),
            session.affirmed(),
        );
    }

    Ok(())
}

fn run_doctor(config: &Config) -> Result<()> {
    let kb = KnowledgeBase::builtin();
    let report_path = PathBuf::from(&config.report.filename);

    let doctor = Doctor::new(kb, report_path);
    let checks = doctor.run_diagnostics();
    Doctor::display_results(&checks);

    std::process::exit(if Doctor::overall_status(&checks) { 0 } else { 1 });
}

fn show_about() {
    let kb = KnowledgeBase::builtin();
    let display = DisplayManager::new();

    display.show_banner(env!("CARGO_PKG_VERSION"));

    display.show_section("What it does");
    display.show_bullet(&format!(
        "Asks {} yes/no questions about common symptoms",
        kb.symptoms.len()
    ));
    display.show_bullet(&format!(
        "Scores {} conditions by summing the weights of your yes answers",
        kb.conditions.len()
    ));
    display.show_bullet("Ranks the top 3 with an approximate confidence percentage");
    display.show_bullet("Warns about urgent symptom combinations");
    display.show_bullet("Writes a plain-text report you can share with a clinician");

    display.show_section("What it does not do");
    display.show_bullet("It does not diagnose, prescribe, or replace medical advice");
    display.show_bullet("It knows nothing beyond its built-in rules");
    println!();
}

fn show_kb(json: bool) -> Result<()> {
    let kb = KnowledgeBase::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&kb)?);
        return Ok(());
    }

    let display = DisplayManager::new();

    display.show_section(&format!("Questions ({})", kb.symptoms.len()));
    for symptom in &kb.symptoms {
        println!("  {:<20} {}", symptom.key, symptom.prompt);
    }

    display.show_section(&format!("Conditions ({})", kb.conditions.len()));
    for rule in &kb.conditions {
        println!(
            "  {:<32} severity: {:<8} max score: {:.1}",
            rule.name,
            rule.severity.to_string(),
            rule.max_possible()
        );
    }

    display.show_section(&format!("Red Flags ({})", kb.red_flags.len()));
    for flag in &kb.red_flags {
        println!("  {} ({})", flag.description, flag.all_of.join(" + "));
    }
    println!();

    Ok(())
}

fn show_config(args: &Args, config: &Config) {
    println!("\n{}", "SymptomBuddy Configuration".bold().cyan());
    println!("{}", "=".repeat(50).cyan());

    match &args.config {
        Some(path) => println!("Config file: {}", path.display()),
        None => match Config::config_path() {
            Ok(path) if path.exists() => println!("Config file: {}", path.display()),
            _ => println!("Config file: (defaults)"),
        },
    }

    println!("\nReport:");
    println!("  Filename:        {}", config.report.filename);
    println!("  Include answers: {}", config.report.include_answers);
    println!("  Width:           {}", config.report.width);

    println!("\nTriage:");
    println!("  Matched only: {}", config.triage.matched_only);

    println!("\nDisplay:");
    println!("  Color:     {}", config.display.color);
    println!("  Verbosity: {:?}", args.verbosity());
    println!();
}
