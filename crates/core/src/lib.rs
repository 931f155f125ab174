#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;

pub use error::Error;
pub use model::{
    BankError, ParseIdError, Question, QuestionBank, QuestionDraft, QuestionError, QuestionId,
};
pub use scoring::{ScoringError, score_percent};
