mod bank;
mod ids;
mod question;

pub use bank::{BankError, QuestionBank};
pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionDraft, QuestionError};
