//! Interactive symptom interview
//!
//! Walks the question bank in order, one yes/no question at a time.
//! Every question must be answered; EOF or interrupt aborts the whole
//! interview rather than leaving a partial answer set.

pub mod input;
pub mod session;

pub use input::{parse_yes_no, InputHandler, NO_WORDS, YES_WORDS};
pub use session::InterviewSession;

use crate::errors::{CheckerError, Result};
use crate::kb::KnowledgeBase;
use crate::triage::AnswerSet;

/// Runs the question loop against an input handler
pub struct Interviewer {
    input: InputHandler,
}

impl Interviewer {
    pub fn new() -> Result<Self> {
        Ok(Interviewer {
            input: InputHandler::new()?,
        })
    }

    /// Ask every question in the bank and collect the answers.
    ///
    /// Prompts are numbered so the user can see progress. EOF before
    /// the last question aborts: a partial answer set would silently
    /// read unanswered symptoms as "no".
    pub fn collect(
        &mut self,
        kb: &KnowledgeBase,
        session: &mut InterviewSession,
    ) -> Result<AnswerSet> {
        let total = kb.symptoms.len();
        let mut answers = AnswerSet::new();

        for (index, symptom) in kb.symptoms.iter().enumerate() {
            let prompt = format!("[{:>2}/{}] {} (yes/no): ", index + 1, total, symptom.prompt);

            match self.input.ask_yes_no(&prompt)? {
                Some(affirmed) => {
                    answers.record(&symptom.key, affirmed);
                    session.record_answer(affirmed);
                }
                None => {
                    return Err(CheckerError::InterviewAborted(
                        "end of input before the last question".to_string(),
                    ));
                }
            }
        }

        Ok(answers)
    }
}

/// Build an answer set by zipping the question bank with prepared
/// answers. Used by the non-interactive paths and tests.
pub fn collect_from(kb: &KnowledgeBase, answers: &[bool]) -> AnswerSet {
    let mut set = AnswerSet::new();
    for (symptom, affirmed) in kb.symptoms.iter().zip(answers.iter()) {
        set.record(&symptom.key, *affirmed);
    }
    set
}
