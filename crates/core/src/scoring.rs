//! Pure score computation over a completed answer sheet.

use thiserror::Error;

use crate::model::QuestionBank;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("expected {expected} answers, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("question {index} has no recorded answer")]
    IncompleteAnswers { index: usize },
}

//
// ─── SCORE CALCULATOR ──────────────────────────────────────────────────────────
//

/// Percentage of correctly answered questions, rounded half away from zero.
///
/// `answers` must hold one set entry per question in the bank. The session
/// gates submission on every question being answered, so the incomplete
/// case is validated rather than assumed away.
///
/// # Errors
///
/// Returns `ScoringError::LengthMismatch` if `answers` is not exactly one
/// entry per question, and `ScoringError::IncompleteAnswers` if any entry
/// is unset.
///
/// # Examples
///
/// ```
/// # use quiz_core::model::{Question, QuestionBank, QuestionId};
/// # use quiz_core::scoring::score_percent;
/// let bank = QuestionBank::new(vec![
///     Question::new(QuestionId::new(1), "Q1", vec!["a".into(), "b".into()], 0).unwrap(),
///     Question::new(QuestionId::new(2), "Q2", vec!["a".into(), "b".into()], 1).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(score_percent(&bank, &[Some(0), Some(0)]), Ok(50));
/// ```
pub fn score_percent(
    bank: &QuestionBank,
    answers: &[Option<usize>],
) -> Result<u8, ScoringError> {
    let total = bank.question_count();
    if answers.len() != total {
        return Err(ScoringError::LengthMismatch {
            expected: total,
            actual: answers.len(),
        });
    }

    let mut correct = 0_usize;
    for (index, (question, answer)) in bank.iter().zip(answers).enumerate() {
        let Some(selected) = answer else {
            return Err(ScoringError::IncompleteAnswers { index });
        };
        if question.is_correct(*selected) {
            correct += 1;
        }
    }

    // round(100 * correct / total), half away from zero, in integer math.
    let percent = (200 * correct + total) / (2 * total);
    Ok(percent as u8)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionId};

    fn bank_with_correct(indices: &[usize]) -> QuestionBank {
        let questions = indices
            .iter()
            .enumerate()
            .map(|(i, &correct)| {
                Question::new(
                    QuestionId::new(i as u64 + 1),
                    format!("Q{i}"),
                    (0..=correct.max(1))
                        .map(|o| format!("option {o}"))
                        .collect(),
                    correct,
                )
                .unwrap()
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    #[test]
    fn all_correct_scores_100() {
        let bank = bank_with_correct(&[1, 1, 1, 2, 3]);
        let answers = [Some(1), Some(1), Some(1), Some(2), Some(3)];
        assert_eq!(score_percent(&bank, &answers), Ok(100));
    }

    #[test]
    fn all_wrong_scores_0() {
        let bank = bank_with_correct(&[1, 1, 1, 2, 3]);
        let answers = [Some(0), Some(0), Some(0), Some(0), Some(0)];
        assert_eq!(score_percent(&bank, &answers), Ok(0));
    }

    #[test]
    fn four_of_five_scores_80() {
        let bank = bank_with_correct(&[1, 1, 1, 2, 3]);
        let answers = [Some(1), Some(1), Some(1), Some(2), Some(0)];
        assert_eq!(score_percent(&bank, &answers), Ok(80));
    }

    #[test]
    fn one_of_three_rounds_down() {
        let bank = bank_with_correct(&[0, 0, 0]);
        let answers = [Some(0), Some(1), Some(1)];
        // 100/3 = 33.33 -> 33
        assert_eq!(score_percent(&bank, &answers), Ok(33));
    }

    #[test]
    fn two_of_three_rounds_up() {
        let bank = bank_with_correct(&[0, 0, 0]);
        let answers = [Some(0), Some(0), Some(1)];
        // 200/3 = 66.67 -> 67
        assert_eq!(score_percent(&bank, &answers), Ok(67));
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        let bank = bank_with_correct(&[0, 0, 0, 0, 0, 0, 0, 0]);

        // 1/8 = 12.5 -> 13
        let answers = [
            Some(0),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
        ];
        assert_eq!(score_percent(&bank, &answers), Ok(13));

        // 3/8 = 37.5 -> 38
        let answers = [
            Some(0),
            Some(0),
            Some(0),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
        ];
        assert_eq!(score_percent(&bank, &answers), Ok(38));
    }

    #[test]
    fn unset_answer_is_rejected() {
        let bank = bank_with_correct(&[0, 0]);
        let err = score_percent(&bank, &[Some(0), None]).unwrap_err();
        assert_eq!(err, ScoringError::IncompleteAnswers { index: 1 });
    }

    #[test]
    fn wrong_sheet_length_is_rejected() {
        let bank = bank_with_correct(&[0, 0]);
        let err = score_percent(&bank, &[Some(0)]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
