//! Built-in red-flag triggers
//!
//! Symptom combinations that warrant urgent care regardless of how any
//! condition ranks. A trigger fires only when every listed symptom is
//! affirmed.

use super::RedFlagRule;

fn flag(description: &str, all_of: &[&str]) -> RedFlagRule {
    RedFlagRule {
        description: description.to_string(),
        all_of: all_of.iter().map(|k| (*k).to_string()).collect(),
    }
}

/// All red-flag triggers
pub fn red_flag_rules() -> Vec<RedFlagRule> {
    vec![
        flag(
            "High fever with shortness of breath",
            &["high_fever", "short_breath"],
        ),
        flag(
            "Chest pain with shortness of breath",
            &["chest_pain", "short_breath"],
        ),
        flag("Stiff neck with high fever", &["neck_stiff", "high_fever"]),
        flag(
            "Signs of dehydration with vomiting and diarrhea",
            &["dehydration_signs", "vomiting", "diarrhea"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_count() {
        assert_eq!(red_flag_rules().len(), 4);
    }

    #[test]
    fn test_every_trigger_names_symptoms() {
        for trigger in red_flag_rules() {
            assert!(!trigger.all_of.is_empty());
            assert!(!trigger.description.is_empty());
        }
    }

    #[test]
    fn test_dehydration_combo_needs_three_symptoms() {
        let rules = red_flag_rules();
        let combo = rules
            .iter()
            .find(|f| f.description.contains("dehydration"))
            .unwrap();
        assert_eq!(combo.all_of.len(), 3);
        assert!(combo.all_of.contains(&"vomiting".to_string()));
    }
}
