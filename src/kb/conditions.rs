//! Built-in condition rules
//!
//! 15 weighted rules. Each rule scores by summing the weights of its
//! affirmed symptoms; the order below is the tie-break order used when
//! two conditions reach the same raw score.

use super::{ConditionRule, Severity, SymptomWeight};

fn rule(
    name: &str,
    weights: &[(&str, f64)],
    severity: Severity,
    advice: &str,
) -> ConditionRule {
    ConditionRule {
        name: name.to_string(),
        weights: weights
            .iter()
            .map(|(key, weight)| SymptomWeight {
                key: (*key).to_string(),
                weight: *weight,
            })
            .collect(),
        severity,
        advice: advice.to_string(),
    }
}

/// All condition rules in tie-break order
pub fn condition_rules() -> Vec<ConditionRule> {
    vec![
        rule(
            "Common Cold",
            &[
                ("runny_nose", 2.0),
                ("sneezing", 2.0),
                ("sore_throat", 1.5),
                ("cough", 1.5),
                ("fever", 0.5),
                ("headache", 0.5),
                ("body_ache", 0.5),
            ],
            Severity::Low,
            "Rest, warm fluids, saltwater gargles. See a doctor if not improving in 3–5 days.",
        ),
        rule(
            "Influenza (Flu)",
            &[
                ("fever", 2.5),
                ("high_fever", 2.0),
                ("chills", 1.5),
                ("dry_cough", 2.0),
                ("body_ache", 1.5),
                ("fatigue", 1.5),
                ("headache", 1.0),
            ],
            Severity::Medium,
            "Rest and fluids. Seek care for high fever or breathing difficulty.",
        ),
        rule(
            "Migraine",
            &[
                ("headache", 3.0),
                ("migraine_aura", 2.0),
                ("photophobia", 1.5),
                ("nausea", 1.0),
            ],
            Severity::Low,
            "Rest in a quiet/dark room and hydrate. See specialist if recurrent.",
        ),
        rule(
            "Suspected Dengue",
            &[
                ("fever", 2.5),
                ("high_fever", 2.0),
                ("rash", 1.5),
                ("eye_pain", 1.5),
                ("joint_pain", 1.5),
                ("body_ache", 1.0),
                ("recent_travel", 0.5),
                ("mosquito_bite", 1.5),
            ],
            Severity::High,
            "Get tested for dengue. Stay hydrated; avoid NSAIDs (use paracetamol).",
        ),
        rule(
            "Typhoid (Suspected)",
            &[
                ("fever", 2.0),
                ("high_fever", 1.5),
                ("abdominal_pain", 1.5),
                ("diarrhea", 1.0),
                ("headache", 1.0),
                ("fatigue", 1.0),
                ("recent_travel", 0.5),
            ],
            Severity::Medium,
            "Persistent fever warrants medical testing. Drink clean water and eat light food.",
        ),
        rule(
            "COVID-19-like",
            &[
                ("fever", 2.0),
                ("dry_cough", 2.0),
                ("loss_smell", 2.0),
                ("short_breath", 2.0),
                ("fatigue", 1.0),
                ("sore_throat", 1.0),
                ("headache", 0.5),
            ],
            Severity::High,
            "Consider isolation and wearing a mask. Seek care for breathing difficulty.",
        ),
        rule(
            "Asthma Exacerbation",
            &[
                ("short_breath", 3.0),
                ("wheezing", 2.0),
                ("cough", 1.5),
                ("chest_pain", 1.0),
            ],
            Severity::High,
            "Use inhaler as prescribed. Seek emergency care if breathing worsens.",
        ),
        rule(
            "Gastroenteritis",
            &[
                ("diarrhea", 2.5),
                ("vomiting", 2.0),
                ("nausea", 1.5),
                ("abdominal_pain", 1.5),
                ("dehydration_signs", 2.0),
            ],
            Severity::Medium,
            "ORS/fluids and light food. Seek care for dehydration.",
        ),
        rule(
            "Dehydration",
            &[
                ("dehydration_signs", 3.0),
                ("diarrhea", 1.0),
                ("vomiting", 1.0),
                ("fever", 0.5),
            ],
            Severity::Medium,
            "Drink ORS/fluids. Emergency care if very dizzy or urine is minimal.",
        ),
        rule(
            "Food Poisoning",
            &[
                ("vomiting", 2.5),
                ("nausea", 2.0),
                ("diarrhea", 1.5),
                ("abdominal_pain", 1.5),
                ("fever", 0.5),
            ],
            Severity::Medium,
            "Hydrate and rest. Seek help for severe symptoms or blood in stool.",
        ),
        rule(
            "Possible Uncontrolled Diabetes",
            &[
                ("excess_thirst", 2.5),
                ("urinate_often", 2.0),
                ("fatigue", 1.5),
                ("weight_loss", 1.5),
                ("dehydration_signs", 1.0),
            ],
            Severity::Medium,
            "Check blood sugar and consult a doctor.",
        ),
        rule(
            "IBS/IBD-like",
            &[
                ("abdominal_pain", 2.0),
                ("diarrhea", 1.5),
                ("blood_in_stool", 2.5),
                ("weight_loss", 1.0),
                ("fatigue", 1.0),
            ],
            Severity::High,
            "See a gastroenterologist if blood in stool or weight loss.",
        ),
        rule(
            "Sinusitis",
            &[
                ("headache", 1.5),
                ("runny_nose", 1.5),
                ("sore_throat", 0.5),
                ("fever", 0.5),
                ("sneezing", 0.5),
            ],
            Severity::Low,
            "Steam inhalation, saline nasal spray; see ENT if persistent.",
        ),
        rule(
            "Meningitis (Red Flag)",
            &[
                ("high_fever", 2.5),
                ("neck_stiff", 3.0),
                ("photophobia", 2.0),
                ("headache", 2.0),
                ("vomiting", 1.0),
            ],
            Severity::Critical,
            "Neck stiffness with high fever and light sensitivity → go to ER immediately.",
        ),
        rule(
            "Cardiac-related (Chest Pain)",
            &[
                ("chest_pain", 3.0),
                ("short_breath", 2.5),
                ("age_over_60", 1.0),
                ("fatigue", 0.5),
            ],
            Severity::Critical,
            "Chest pain or severe shortness of breath → seek emergency care immediately.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_count() {
        assert_eq!(condition_rules().len(), 15);
    }

    #[test]
    fn test_tie_break_order() {
        let rules = condition_rules();
        assert_eq!(rules[0].name, "Common Cold");
        assert_eq!(rules[1].name, "Influenza (Flu)");
        assert_eq!(rules[14].name, "Cardiac-related (Chest Pain)");
    }

    #[test]
    fn test_flu_weights() {
        let rules = condition_rules();
        let flu = rules.iter().find(|r| r.name == "Influenza (Flu)").unwrap();
        assert_eq!(flu.weight_for("fever"), Some(2.5));
        assert_eq!(flu.weight_for("dry_cough"), Some(2.0));
        assert_eq!(flu.max_possible(), 12.0);
    }

    #[test]
    fn test_critical_conditions() {
        let rules = condition_rules();
        let critical: Vec<&str> = rules
            .iter()
            .filter(|r| r.severity == Severity::Critical)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            critical,
            vec!["Meningitis (Red Flag)", "Cardiac-related (Chest Pain)"]
        );
    }

    #[test]
    fn test_every_rule_has_advice() {
        for rule in condition_rules() {
            assert!(!rule.advice.is_empty(), "'{}' has no advice", rule.name);
        }
    }

    #[test]
    fn test_all_weights_positive() {
        for rule in condition_rules() {
            for entry in &rule.weights {
                assert!(
                    entry.weight > 0.0,
                    "'{}' has non-positive weight for '{}'",
                    rule.name,
                    entry.key
                );
            }
        }
    }
}
