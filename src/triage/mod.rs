//! Triage engine: scoring, ranking, and red-flag detection
//!
//! The pipeline is pure and single-threaded: answers go in, a
//! [`TriageOutcome`] comes out. Scoring sums affirmed weights per
//! condition, ranking converts to confidence and keeps the top
//! entries, and red-flag detection runs independently of both.
//!
//! Performance target: full pipeline over the built-in rules in
//! well under a millisecond.

pub mod ranker;
pub mod red_flags;
pub mod scorer;
pub mod types;

pub use ranker::{Ranker, RankerConfig};
pub use types::{
    AnswerSet, RankedCondition, RedFlagHit, RedFlagResult, ScoredCondition, TriageOutcome,
};

use crate::kb::KnowledgeBase;

/// Run the full triage pipeline over one answer set
pub fn run(kb: &KnowledgeBase, answers: &AnswerSet, config: RankerConfig) -> TriageOutcome {
    let scored = scorer::score_all(kb, answers);
    let ranked = Ranker::with_config(config).rank(&scored);
    let red_flags = red_flags::detect(&kb.red_flags, answers);

    TriageOutcome {
        ranked,
        scored,
        red_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_produces_top_three() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::from_affirmed(&["fever", "headache", "fatigue"]);
        let outcome = run(&kb, &answers, RankerConfig::default());

        assert_eq!(outcome.ranked.len(), 3);
        assert_eq!(outcome.scored.len(), 15);
        assert!(!outcome.red_flags.urgent());
    }

    #[test]
    fn test_run_detects_red_flags_independently() {
        let kb = KnowledgeBase::builtin();
        // Only the combo symptoms affirmed; most conditions score low
        let answers = AnswerSet::from_affirmed(&["neck_stiff", "high_fever"]);
        let outcome = run(&kb, &answers, RankerConfig::default());

        assert!(outcome.red_flags.urgent());
        assert_eq!(
            outcome.red_flags.hits[0].description,
            "Stiff neck with high fever"
        );
    }

    #[test]
    fn test_run_all_no_still_ranks() {
        let kb = KnowledgeBase::builtin();
        let outcome = run(&kb, &AnswerSet::new(), RankerConfig::default());

        assert_eq!(outcome.ranked.len(), 3);
        assert!(outcome.ranked.iter().all(|c| c.raw_score == 0.0));
        assert!(outcome.ranked.iter().all(|c| c.confidence == 0.0));
        // Zero scores all tie, so rule order decides
        assert_eq!(outcome.ranked[0].name, "Common Cold");
    }

    #[test]
    fn test_run_matched_only_can_return_fewer() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::from_affirmed(&["migraine_aura"]);
        let config = RankerConfig {
            top_n: 3,
            matched_only: true,
        };
        let outcome = run(&kb, &answers, config);

        assert_eq!(outcome.ranked.len(), 1);
        assert_eq!(outcome.ranked[0].name, "Migraine");
    }
}
