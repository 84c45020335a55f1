//! Plain-text report rendering
//!
//! Pure formatting: the caller supplies the timestamp and session
//! reference, so output is deterministic and testable. Layout is
//! fixed-width text suitable for printing or archiving.

use chrono::{DateTime, Local};

use crate::kb::KnowledgeBase;
use crate::triage::{AnswerSet, TriageOutcome};

/// Timestamp format used in the report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Heading above the ranked shortlist
pub const TOP_CONDITIONS_HEADING: &str = "Top 3 Possible Conditions";

/// Report layout options
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Wrap width for advice and the disclaimer
    pub width: usize,
    /// Include the full question/answer transcript
    pub include_answers: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: 72,
            include_answers: true,
        }
    }
}

/// Render the complete report as plain text
pub fn format_report(
    kb: &KnowledgeBase,
    answers: &AnswerSet,
    outcome: &TriageOutcome,
    session_ref: &str,
    generated_at: DateTime<Local>,
    opts: &ReportOptions,
) -> String {
    let width = opts.width.max(20);
    let mut out = String::new();

    out.push_str(&"=".repeat(width));
    out.push('\n');
    out.push_str("SymptomBuddy Symptom Check Report\n");
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format(REPORT_TIMESTAMP_FORMAT)
    ));
    out.push_str(&format!("Reference: {}\n", session_ref));

    if opts.include_answers {
        out.push('\n');
        push_section(&mut out, "Answers", width);
        for symptom in &kb.symptoms {
            let mark = if answers.is_affirmed(&symptom.key) {
                "yes"
            } else {
                "no"
            };
            out.push_str(&format!("{:>3}  {}\n", mark, symptom.prompt));
        }
    }

    out.push('\n');
    push_section(&mut out, TOP_CONDITIONS_HEADING, width);
    if outcome.ranked.is_empty() {
        out.push_str("No conditions matched your answers.\n");
    } else {
        for (index, condition) in outcome.ranked.iter().enumerate() {
            out.push_str(&format!(
                "{}. {}: approx. {:.1}% (severity: {})\n",
                index + 1,
                condition.name,
                condition.confidence,
                condition.severity
            ));
            let advice = format!("Advice: {}", condition.advice);
            for line in wrap(&advice, width.saturating_sub(3)) {
                out.push_str(&format!("   {}\n", line));
            }
        }
    }

    if outcome.red_flags.urgent() {
        out.push('\n');
        push_section(&mut out, "URGENT WARNING", width);
        for hit in &outcome.red_flags.hits {
            out.push_str(&format!("* {}\n", hit.description));
            out.push_str(&format!("  (symptoms: {})\n", hit.matched.join(", ")));
        }
        out.push_str("Please seek immediate medical attention.\n");
    }

    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    let disclaimer = "This report was generated by rule-based software and is not \
                      a medical diagnosis. Consult a qualified clinician for medical advice.";
    for line in wrap(disclaimer, width) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn push_section(out: &mut String, title: &str, width: usize) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

/// Greedy word wrap. Words longer than the width get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{self, RankerConfig};
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn sample_report(affirmed: &[&str], opts: &ReportOptions) -> String {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::from_affirmed(affirmed);
        let outcome = triage::run(&kb, &answers, RankerConfig::default());
        format_report(&kb, &answers, &outcome, "a1b2c3d4", fixed_timestamp(), opts)
    }

    #[test]
    fn test_header_has_timestamp_and_reference() {
        let report = sample_report(&["fever"], &ReportOptions::default());
        assert!(report.contains("Generated: 2024-01-15 10:30"));
        assert!(report.contains("Reference: a1b2c3d4"));
    }

    #[test]
    fn test_heading_is_literal() {
        let report = sample_report(&["fever"], &ReportOptions::default());
        assert!(report.contains("Top 3 Possible Conditions"));
    }

    #[test]
    fn test_transcript_lists_every_question() {
        let kb = KnowledgeBase::builtin();
        let report = sample_report(&["fever"], &ReportOptions::default());
        for symptom in &kb.symptoms {
            assert!(
                report.contains(&symptom.prompt),
                "missing prompt: {}",
                symptom.prompt
            );
        }
        assert!(report.contains("yes  Do you have a fever?"));
        assert!(report.contains(" no  Are you sneezing?"));
    }

    #[test]
    fn test_transcript_can_be_disabled() {
        let opts = ReportOptions {
            include_answers: false,
            ..Default::default()
        };
        let report = sample_report(&["fever"], &opts);
        assert!(!report.contains("Answers\n"));
        assert!(!report.contains("Are you sneezing?"));
        // Shortlist still present
        assert!(report.contains("Top 3 Possible Conditions"));
    }

    #[test]
    fn test_ranked_entries_are_numbered() {
        let report = sample_report(&["fever", "dry_cough", "chills"], &ReportOptions::default());
        assert!(report.contains("1. Influenza (Flu): approx. "));
        assert!(report.contains("2. "));
        assert!(report.contains("3. "));
        assert!(report.contains("(severity: medium)"));
    }

    #[test]
    fn test_red_flag_block_present_when_urgent() {
        let report = sample_report(&["high_fever", "short_breath"], &ReportOptions::default());
        assert!(report.contains("URGENT WARNING"));
        assert!(report.contains("* High fever with shortness of breath"));
        assert!(report.contains("(symptoms: high_fever, short_breath)"));
        assert!(report.contains("Please seek immediate medical attention."));
    }

    #[test]
    fn test_red_flag_block_absent_when_calm() {
        let report = sample_report(&["fever"], &ReportOptions::default());
        assert!(!report.contains("URGENT WARNING"));
    }

    #[test]
    fn test_empty_shortlist_message() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::new();
        let config = RankerConfig {
            top_n: 3,
            matched_only: true,
        };
        let outcome = triage::run(&kb, &answers, config);
        let report = format_report(
            &kb,
            &answers,
            &outcome,
            "a1b2c3d4",
            fixed_timestamp(),
            &ReportOptions::default(),
        );
        assert!(report.contains("No conditions matched your answers."));
    }

    #[test]
    fn test_disclaimer_footer() {
        let report = sample_report(&[], &ReportOptions::default());
        // The footer is wrapped, so compare against the unwrapped text
        let flat = report.replace('\n', " ");
        assert!(flat.contains("not a medical diagnosis"));
        assert!(flat.contains("Consult a qualified clinician"));
    }

    #[test]
    fn test_advice_respects_width() {
        let opts = ReportOptions {
            width: 40,
            ..Default::default()
        };
        let report = sample_report(&["fever", "dry_cough"], &opts);
        for line in report.lines().filter(|l| l.starts_with("   ")) {
            assert!(
                line.chars().count() <= 40,
                "line too long: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_wrap_greedy() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        let lines = wrap("a extraordinarily b", 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = sample_report(&["fever", "rash"], &ReportOptions::default());
        let second = sample_report(&["fever", "rash"], &ReportOptions::default());
        assert_eq!(first, second);
    }
}
