//! Red-flag detection
//!
//! Runs independently of scoring and ranking: a trigger fires exactly
//! when all of its symptoms are affirmed, whether or not any condition
//! ranks highly.

use crate::kb::RedFlagRule;

use super::types::{AnswerSet, RedFlagHit, RedFlagResult};

/// Check every trigger against the answers
pub fn detect(rules: &[RedFlagRule], answers: &AnswerSet) -> RedFlagResult {
    let hits = rules
        .iter()
        .filter(|rule| {
            !rule.all_of.is_empty() && rule.all_of.iter().all(|key| answers.is_affirmed(key))
        })
        .map(|rule| RedFlagHit {
            description: rule.description.clone(),
            matched: rule.all_of.clone(),
        })
        .collect();

    RedFlagResult { hits }
}
