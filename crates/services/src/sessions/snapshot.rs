use quiz_core::model::Question;

use super::service::SessionPhase;

/// Read-only view of a session for the presentation layer.
///
/// Produced fresh by `QuizSession::snapshot` after every operation; holds
/// everything a render pass needs so views never reach into session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub total_questions: usize,
    pub question: Question,
    pub selected_option: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
    pub can_advance: bool,
    pub phase: SessionPhase,
    pub score_percent: u8,
}
