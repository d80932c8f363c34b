use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_question::ANSWER_COUNT;
use crate::models::domain::{QuestionResult, Quiz, QuizQuestion, QuizResult};

pub struct GradingService;

impl GradingService {
    /// Grade a delivered quiz against one selection per question.
    ///
    /// `None` marks an unanswered question, which counts as incorrect.
    pub fn grade(quiz: &Quiz, selected_answers: &[Option<u8>]) -> AppResult<QuizResult> {
        if selected_answers.len() != quiz.questions.len() {
            return Err(AppError::ValidationError(format!(
                "expected {} selected answers, got {}",
                quiz.questions.len(),
                selected_answers.len()
            )));
        }

        let results = quiz
            .questions
            .iter()
            .zip(selected_answers)
            .enumerate()
            .map(|(index, (question, selected))| Self::grade_question(index, question, *selected))
            .collect::<AppResult<Vec<_>>>()?;

        let score = results.iter().filter(|r| r.is_correct).count() as u32;
        let total = results.len() as u32;

        Ok(QuizResult {
            score,
            total,
            percentage: percentage(score, total),
            results,
        })
    }

    fn grade_question(
        index: usize,
        question: &QuizQuestion,
        selected: Option<u8>,
    ) -> AppResult<QuestionResult> {
        if question.answers.len() != ANSWER_COUNT
            || usize::from(question.correct_answer_index) >= ANSWER_COUNT
        {
            return Err(AppError::ValidationError(format!(
                "question {} is not a four-option question",
                index
            )));
        }

        if let Some(choice) = selected {
            if usize::from(choice) >= ANSWER_COUNT {
                return Err(AppError::ValidationError(format!(
                    "selected answer {} for question {} is out of range",
                    choice, index
                )));
            }
        }

        Ok(QuestionResult {
            index: index as u32,
            selected_answer_index: selected,
            correct_answer_index: question.correct_answer_index,
            is_correct: selected == Some(question.correct_answer_index),
        })
    }
}

fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) * 100.0 / f64::from(total)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn quiz(correct: &[u8]) -> Quiz {
        fixtures::quiz("History", correct)
    }

    #[test]
    fn test_grade_counts_correct_answers() {
        let result = GradingService::grade(&quiz(&[0, 1, 2]), &[Some(0), Some(3), Some(2)])
            .expect("grading should succeed");

        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.percentage, 67);
        assert!(result.results[0].is_correct);
        assert!(!result.results[1].is_correct);
        assert_eq!(result.results[1].correct_answer_index, 1);
    }

    #[test]
    fn test_unanswered_question_is_incorrect() {
        let result = GradingService::grade(&quiz(&[0, 1]), &[None, Some(1)])
            .expect("grading should succeed");

        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
        assert_eq!(result.results[0].selected_answer_index, None);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = GradingService::grade(&quiz(&[0, 1]), &[Some(0)]).expect_err("should fail");
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let err = GradingService::grade(&quiz(&[0]), &[Some(4)]).expect_err("should fail");
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_empty_quiz_scores_zero_percent() {
        let result = GradingService::grade(&quiz(&[]), &[]).expect("grading should succeed");
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(5, 5), 100);
    }
}
