use std::sync::Arc;

use quiz_core::model::{Question, QuestionBank};
use quiz_core::scoring::score_percent;

use super::snapshot::SessionSnapshot;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Coarse state of a session.
///
/// `current_index` and the answer sheet are mutable while `InProgress` and
/// frozen once `Completed`; `score_percent` is meaningful only when
/// `Completed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz attempt over a question bank.
///
/// Steps through the bank sequentially under an answer-before-advance rule:
/// moving forward and submitting are gated on the current question having a
/// recorded answer, moving back never clears one. Because of that gating,
/// every question on the traversed prefix is answered by the time
/// submission is reachable.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current: usize,
    answers: Vec<Option<usize>>,
    phase: SessionPhase,
    score_percent: u8,
}

impl QuizSession {
    /// Create a fresh session at question 0 with an all-unset answer sheet.
    ///
    /// Infallible: the bank is non-empty by construction.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let answers = vec![None; bank.question_count()];
        Self {
            bank,
            current: 0,
            answers,
            phase: SessionPhase::InProgress,
            score_percent: 0,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Final percentage score; 0 until the session completes.
    #[must_use]
    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    /// One entry per question; unset entries are questions not yet answered.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|entry| entry.is_some()).count()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        // current < question_count is a structural invariant; every
        // navigation path below keeps it inside bounds.
        &self.bank.questions()[self.current]
    }

    fn current_answered(&self) -> bool {
        self.answers[self.current].is_some()
    }

    fn is_last(&self) -> bool {
        self.current + 1 == self.bank.question_count()
    }

    /// Record `option_index` as the answer for the current question.
    ///
    /// Overwriting is allowed and idempotent: re-selecting the same option
    /// or switching to a different one simply replaces the stored entry,
    /// including after navigating away and back.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOption` if the session is already
    /// completed or `option_index` is out of bounds for the current
    /// question. Both indicate a caller defect, never a user action.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), SessionError> {
        let option_count = self.current_question().option_count();
        if self.is_complete() || option_index >= option_count {
            return Err(SessionError::InvalidOption {
                index: option_index,
                option_count,
            });
        }

        self.answers[self.current] = Some(option_index);
        Ok(())
    }

    /// Move to the next question.
    ///
    /// A no-op returning `false` unless the session is in progress, the
    /// current question is answered, and it is not the last one. The no-op
    /// models a disabled control, not a fault.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() || !self.current_answered() || self.is_last() {
            return false;
        }

        self.current += 1;
        true
    }

    /// Move to the previous question.
    ///
    /// A no-op returning `false` at question 0 or once completed. Never
    /// requires or touches the answer at the index being left.
    pub fn retreat(&mut self) -> bool {
        if self.is_complete() || self.current == 0 {
            return false;
        }

        self.current -= 1;
        true
    }

    /// Score the answer sheet and complete the session.
    ///
    /// A no-op returning `Ok(false)` unless the session is in progress with
    /// the current question answered; submission is only reachable from the
    /// last question, at which point the gating guarantees a full sheet.
    ///
    /// # Errors
    ///
    /// Propagates `ScoringError` as `SessionError::Scoring` if the sheet is
    /// incomplete after all. That means the gating invariant is broken and
    /// must surface loudly rather than produce a misleading score.
    pub fn submit(&mut self) -> Result<bool, SessionError> {
        if self.is_complete() || !self.current_answered() || !self.is_last() {
            return Ok(false);
        }

        self.score_percent = score_percent(&self.bank, &self.answers)?;
        self.phase = SessionPhase::Completed;
        Ok(true)
    }

    /// Reset to the start-of-quiz state. Valid from either phase.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.bank.question_count()];
        self.phase = SessionPhase::InProgress;
        self.score_percent = 0;
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current,
            total_questions: self.bank.question_count(),
            question: self.current_question().clone(),
            selected_option: self.answers[self.current],
            is_first: self.current == 0,
            is_last: self.is_last(),
            can_advance: !self.is_complete() && self.current_answered() && !self.is_last(),
            phase: self.phase,
            score_percent: self.score_percent,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
