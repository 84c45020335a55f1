//! SymptomBuddy - Terminal Symptom Checker
//!
//! A rule-based yes/no symptom questionnaire for the terminal. Answers
//! are scored against weighted condition rules, the top matches are
//! ranked with a confidence percentage, urgent symptom combinations
//! raise red-flag warnings, and a plain-text report is written to disk.
//!
//! # Architecture
//!
//! - `kb`: immutable question bank, condition rules, red-flag triggers
//! - `interview`: readline question loop and session tracking
//! - `triage`: scoring, ranking, and red-flag detection
//! - `report`: plain-text report rendering and file output

pub mod errors;
pub mod kb;
pub mod triage;
pub mod interview;
pub mod report;

// Re-export commonly used types
pub use errors::{CheckerError, Result};

// Terminal surface
pub mod cli;
pub mod config;
pub mod display;
pub mod doctor;
