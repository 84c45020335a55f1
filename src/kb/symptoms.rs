//! Built-in question bank
//!
//! 34 yes/no questions, asked in the order listed here. Keys are the
//! stable identifiers referenced by condition weights and red flags;
//! prompts are the literal text shown to the user.

use super::Symptom;

/// Key/prompt pairs in interview order
const QUESTIONS: &[(&str, &str)] = &[
    ("fever", "Do you have a fever?"),
    ("high_fever", "Is the temperature very high (>=38.5°C / 101.3°F)?"),
    ("chills", "Are you experiencing chills?"),
    ("cough", "Do you have a cough?"),
    ("dry_cough", "Is the cough dry?"),
    ("sore_throat", "Do you have a sore or scratchy throat?"),
    ("runny_nose", "Do you have a runny nose?"),
    ("sneezing", "Are you sneezing?"),
    ("headache", "Do you have a headache?"),
    ("migraine_aura", "Do you experience visual sensitivity or aura with headache?"),
    ("body_ache", "Do you have body aches or muscle pain?"),
    ("fatigue", "Are you unusually tired or fatigued?"),
    ("short_breath", "Are you experiencing shortness of breath?"),
    ("chest_pain", "Do you have chest pain?"),
    ("wheezing", "Do you hear wheezing sounds when breathing?"),
    ("diarrhea", "Are you having diarrhea?"),
    ("vomiting", "Are you vomiting?"),
    ("nausea", "Do you feel nauseous?"),
    ("abdominal_pain", "Do you have abdominal pain?"),
    ("loss_smell", "Has your sense of smell or taste decreased?"),
    ("rash", "Do you have a skin rash or hives?"),
    ("eye_pain", "Are you experiencing eye pain or blurred vision?"),
    ("joint_pain", "Do you have joint pain?"),
    ("dehydration_signs", "Do you have dry mouth or reduced urination (signs of dehydration)?"),
    ("urinate_often", "Are you urinating more frequently?"),
    ("excess_thirst", "Do you feel excessive thirst?"),
    ("weight_loss", "Have you experienced unexplained weight loss?"),
    ("blood_in_stool", "Is there blood or dark color in stool?"),
    ("recent_travel", "Have you recently traveled to an area with outbreaks?"),
    ("mosquito_bite", "Have you had many mosquito bites recently?"),
    ("neck_stiff", "Is your neck stiff?"),
    ("photophobia", "Are you sensitive to bright light?"),
    ("age_over_60", "Are you over 60 years old?"),
    ("chronic_condition", "Do you have chronic conditions (diabetes/heart/kidney/asthma)?"),
];

/// The full question bank in interview order
pub fn question_bank() -> Vec<Symptom> {
    QUESTIONS
        .iter()
        .map(|(key, prompt)| Symptom {
            key: (*key).to_string(),
            prompt: (*prompt).to_string(),
        })
        .collect()
}
