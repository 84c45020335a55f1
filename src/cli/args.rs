//! Command-line argument parsing for SymptomBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SymptomBuddy - Weighted yes/no symptom checker for the terminal
#[derive(Parser, Debug)]
#[command(name = "symptombuddy")]
#[command(version = "0.3.0")]
#[command(about = "Answer yes/no symptom questions, get ranked possible conditions", long_about = None)]
pub struct Args {
    /// Write the report to this path instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip writing the report file
    #[arg(long)]
    pub no_report: bool,

    /// Only list conditions that matched at least one symptom
    #[arg(long)]
    pub matched_only: bool,

    /// Report wrap width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what this tool does and does not do
    About,

    /// List the built-in questions, conditions, and red flags
    Kb {
        /// Dump the knowledge base as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run self-diagnostics and health checks
    Doctor,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check flag combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.no_report && self.output.is_some() {
            return Err("Cannot combine --no-report with --output.".to_string());
        }

        if self.width == Some(0) {
            return Err("Report width must be at least 1 column.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show the full score table
    pub fn show_score_table(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should show timing stats
    pub fn show_timings(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}
