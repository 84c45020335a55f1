//! Condition scoring
//!
//! Pure functions: a rule's raw score is the sum of weights whose
//! symptom was affirmed. No thresholds or normalization happen here;
//! ranking converts raw scores to confidence percentages.

use crate::kb::{ConditionRule, KnowledgeBase};

use super::types::{AnswerSet, ScoredCondition};

/// Score a single rule against the answers
pub fn score_rule(rule: &ConditionRule, answers: &AnswerSet) -> ScoredCondition {
    // Fold from +0.0: `sum()` over no matches is IEEE -0.0, which
    // renders as "-0.0%" downstream.
    let raw_score = rule
        .weights
        .iter()
        .filter(|w| answers.is_affirmed(&w.key))
        .fold(0.0, |acc, w| acc + w.weight);

    ScoredCondition {
        name: rule.name.clone(),
        raw_score,
        max_possible: rule.max_possible(),
        severity: rule.severity,
        advice: rule.advice.clone(),
    }
}

/// Score every rule, preserving rule order.
///
/// Zero-score conditions are kept; filtering is a ranking policy.
pub fn score_all(kb: &KnowledgeBase, answers: &AnswerSet) -> Vec<ScoredCondition> {
    kb.conditions
        .iter()
        .map(|rule| score_rule(rule, answers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::{Severity, SymptomWeight};

    fn flu_rule() -> ConditionRule {
        ConditionRule {
            name: "Flu".to_string(),
            weights: vec![
                SymptomWeight { key: "fever".to_string(), weight: 3.0 },
                SymptomWeight { key: "cough".to_string(), weight: 2.0 },
                SymptomWeight { key: "fatigue".to_string(), weight: 2.0 },
            ],
            severity: Severity::Medium,
            advice: "Rest and fluids.".to_string(),
        }
    }

    #[test]
    fn test_score_sums_affirmed_weights() {
        let answers = AnswerSet::from_affirmed(&["fever", "cough"]);
        let scored = score_rule(&flu_rule(), &answers);
        assert_eq!(scored.raw_score, 5.0);
        assert_eq!(scored.max_possible, 7.0);
    }

    #[test]
    fn test_denied_symptoms_do_not_count() {
        let mut answers = AnswerSet::new();
        answers.record("fever", true);
        answers.record("cough", false);
        let scored = score_rule(&flu_rule(), &answers);
        assert_eq!(scored.raw_score, 3.0);
    }

    #[test]
    fn test_all_no_scores_zero() {
        let answers = AnswerSet::new();
        let scored = score_rule(&flu_rule(), &answers);
        assert_eq!(scored.raw_score, 0.0);
        // -0.0 satisfies the equality above; the sign matters for display
        assert!(!scored.raw_score.is_sign_negative());
    }

    #[test]
    fn test_unrelated_symptoms_ignored() {
        let answers = AnswerSet::from_affirmed(&["rash", "headache"]);
        let scored = score_rule(&flu_rule(), &answers);
        assert_eq!(scored.raw_score, 0.0);
    }

    #[test]
    fn test_score_all_preserves_rule_order() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::from_affirmed(&["fever"]);
        let scored = score_all(&kb, &answers);

        assert_eq!(scored.len(), kb.conditions.len());
        for (got, rule) in scored.iter().zip(&kb.conditions) {
            assert_eq!(got.name, rule.name);
        }
    }

    #[test]
    fn test_score_all_keeps_zero_scores() {
        let kb = KnowledgeBase::builtin();
        let scored = score_all(&kb, &AnswerSet::new());
        assert!(scored.iter().all(|s| s.raw_score == 0.0));
        assert!(scored.iter().all(|s| !s.raw_score.is_sign_negative()));
        assert_eq!(scored.len(), 15);
    }

    #[test]
    fn test_builtin_fever_scores() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::from_affirmed(&["fever"]);
        let scored = score_all(&kb, &answers);

        let flu = scored.iter().find(|s| s.name == "Influenza (Flu)").unwrap();
        assert_eq!(flu.raw_score, 2.5);

        let migraine = scored.iter().find(|s| s.name == "Migraine").unwrap();
        assert_eq!(migraine.raw_score, 0.0);
    }
}
