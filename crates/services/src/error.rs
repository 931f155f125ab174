//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::scoring::ScoringError;

/// Errors emitted by `QuizSession`.
///
/// Only caller defects surface as errors here. Navigation and submission
/// with an unmet precondition are defined no-ops, not errors, because they
/// model disabled controls in the presentation layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("option {index} is invalid for a question with {option_count} options")]
    InvalidOption { index: usize, option_count: usize },

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
