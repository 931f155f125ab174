use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft};

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Immutable, ordered catalog of questions, built once at startup.
///
/// The bank is never empty and question ids are unique; both are enforced
/// at construction so downstream code can rely on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty question list and
    /// `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (pos, question) in questions.iter().enumerate() {
            if questions[..pos].iter().any(|q| q.id() == question.id()) {
                return Err(BankError::DuplicateId { id: question.id() });
            }
        }

        Ok(Self { questions })
    }

    /// Validate a list of drafts (e.g. from a question file) into a bank.
    ///
    /// # Errors
    ///
    /// Returns `Error::Question` for the first invalid draft and
    /// `Error::Bank` for an empty list or duplicate ids.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, crate::Error> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions)?)
    }

    /// Fixed number of questions (> 0, constant for the process).
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index` is not in
    /// `[0, question_count)`.
    pub fn question_at(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

//
// ─── BANK ERRORS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank must contain at least one question")]
    Empty,

    #[error("duplicate question id {id}")]
    DuplicateId { id: QuestionId },

    #[error("question index {index} is out of range for {count} questions")]
    OutOfRange { index: usize, count: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
