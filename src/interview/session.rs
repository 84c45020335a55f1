//! Interview session tracking
//!
//! One session per questionnaire run: a reference id for the report,
//! a start instant for the elapsed-time stats, and running answer
//! counts for the completion summary.

use std::time::{Duration, Instant};
use uuid::Uuid;

/// State for a single questionnaire run
#[derive(Debug, Clone)]
pub struct InterviewSession {
    /// Unique session ID
    pub id: Uuid,
    started: Instant,
    answered: usize,
    affirmed: usize,
}

impl InterviewSession {
    pub fn new() -> Self {
        InterviewSession {
            id: Uuid::new_v4(),
            started: Instant::now(),
            answered: 0,
            affirmed: 0,
        }
    }

    /// Count one answer
    pub fn record_answer(&mut self, affirmed: bool) {
        self.answered += 1;
        if affirmed {
            self.affirmed += 1;
        }
    }

    /// Short reference printed in the report header
    pub fn reference(&self) -> String {
        let id = self.id.simple().to_string();
        id[..8].to_string()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn affirmed(&self) -> usize {
        self.affirmed
    }
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_counts_zero() {
        let session = InterviewSession::new();
        assert_eq!(session.answered(), 0);
        assert_eq!(session.affirmed(), 0);
    }

    #[test]
    fn test_record_answer_counts() {
        let mut session = InterviewSession::new();
        session.record_answer(true);
        session.record_answer(false);
        session.record_answer(true);
        assert_eq!(session.answered(), 3);
        assert_eq!(session.affirmed(), 2);
    }

    #[test]
    fn test_reference_is_short_hex() {
        let session = InterviewSession::new();
        let reference = session.reference();
        assert_eq!(reference.len(), 8);
        assert!(reference.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sessions_have_unique_ids() {
        let a = InterviewSession::new();
        let b = InterviewSession::new();
        assert_ne!(a.id, b.id);
    }
}
