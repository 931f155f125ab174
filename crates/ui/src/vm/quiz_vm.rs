use services::{SessionPhase, SessionSnapshot};

/// One selectable answer row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub index: usize,
    pub label: String,
    pub is_selected: bool,
}

/// Render-ready data for the in-progress quiz card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub prompt: String,
    pub position_label: String,
    pub options: Vec<OptionRowVm>,
    /// One flag per question; filled up to and including the current one.
    pub progress: Vec<bool>,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub is_last: bool,
    pub can_submit: bool,
}

#[must_use]
pub fn map_quiz_card(snapshot: &SessionSnapshot) -> QuizCardVm {
    let options = snapshot
        .question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| OptionRowVm {
            index,
            label: label.clone(),
            is_selected: snapshot.selected_option == Some(index),
        })
        .collect();

    let progress = (0..snapshot.total_questions)
        .map(|index| index <= snapshot.current_index)
        .collect();

    let in_progress = snapshot.phase == SessionPhase::InProgress;

    QuizCardVm {
        // Prompts carry their 1-based number, "3. Which planet do we live on?".
        prompt: format!(
            "{}. {}",
            snapshot.current_index + 1,
            snapshot.question.text()
        ),
        position_label: format!(
            "Question {} of {}",
            snapshot.current_index + 1,
            snapshot.total_questions
        ),
        options,
        progress,
        can_retreat: in_progress && !snapshot.is_first,
        can_advance: snapshot.can_advance,
        is_last: snapshot.is_last,
        can_submit: in_progress && snapshot.is_last && snapshot.selected_option.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionBank, QuestionId};
    use services::QuizSession;
    use std::sync::Arc;

    fn session() -> QuizSession {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Q{id}"),
                    vec!["a".into(), "b".into(), "c".into()],
                    0,
                )
                .unwrap()
            })
            .collect();
        QuizSession::new(Arc::new(QuestionBank::new(questions).unwrap()))
    }

    #[test]
    fn card_for_a_fresh_session() {
        let card = map_quiz_card(&session().snapshot());

        assert_eq!(card.prompt, "1. Q1");
        assert_eq!(card.position_label, "Question 1 of 3");
        assert_eq!(card.options.len(), 3);
        assert!(card.options.iter().all(|opt| !opt.is_selected));
        assert_eq!(card.progress, vec![true, false, false]);
        assert!(!card.can_retreat);
        assert!(!card.can_advance);
        assert!(!card.can_submit);
    }

    #[test]
    fn card_numbers_the_prompt_per_question() {
        let mut session = session();
        session.select_option(0).unwrap();
        session.advance();

        let card = map_quiz_card(&session.snapshot());
        assert_eq!(card.prompt, "2. Q2");
    }

    #[test]
    fn card_marks_the_selected_option() {
        let mut session = session();
        session.select_option(1).unwrap();

        let card = map_quiz_card(&session.snapshot());
        assert!(card.options[1].is_selected);
        assert!(!card.options[0].is_selected);
        assert!(card.can_advance);
    }

    #[test]
    fn card_on_the_last_question_offers_submit() {
        let mut session = session();
        session.select_option(0).unwrap();
        session.advance();
        session.select_option(0).unwrap();
        session.advance();

        let card = map_quiz_card(&session.snapshot());
        assert!(card.is_last);
        assert!(!card.can_advance);
        assert!(!card.can_submit);
        assert_eq!(card.progress, vec![true, true, true]);

        session.select_option(2).unwrap();
        let card = map_quiz_card(&session.snapshot());
        assert!(card.can_submit);
    }
}
