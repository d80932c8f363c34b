#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::{
        Difficulty, EducationLevel, ExplanationStyle, Quiz, QuizQuestion,
    };
    use crate::models::dto::request::{ExplanationParams, QuizParams};

    pub fn quiz_params(
        subject: &str,
        education_level: EducationLevel,
        question_count: u32,
        difficulty: Difficulty,
    ) -> QuizParams {
        QuizParams {
            subject: subject.to_string(),
            education_level,
            topics: None,
            question_count,
            difficulty,
        }
    }

    pub fn explanation_params(
        topic: &str,
        education_level: Option<EducationLevel>,
        explanation_style: ExplanationStyle,
    ) -> ExplanationParams {
        ExplanationParams {
            topic: topic.to_string(),
            education_level,
            specific_questions: None,
            explanation_style,
        }
    }

    /// A well-formed question as the AI would return it.
    pub fn question_json(n: usize) -> Value {
        json!({
            "question": format!("Question {}?", n),
            "answers": ["alpha", "beta", "gamma", "delta"],
            "correctAnswerIndex": n % 4,
            "explanation": "Because it is.",
        })
    }

    pub fn quiz_payload_json(count: usize) -> Value {
        json!({
            "title": "Algebra Basics",
            "description": "Warm-up questions",
            "questions": (0..count).map(question_json).collect::<Vec<_>>(),
        })
    }

    pub fn question(correct_answer_index: u8) -> QuizQuestion {
        QuizQuestion {
            question: "Pick one".to_string(),
            answers: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer_index,
            explanation: "Because".to_string(),
        }
    }

    /// A delivered quiz whose questions have the given correct indices.
    pub fn quiz(subject: &str, correct: &[u8]) -> Quiz {
        Quiz {
            title: format!("{} Quiz (High School)", subject),
            description: format!("A easy level quiz on {} concepts.", subject),
            subject: subject.to_string(),
            difficulty: Difficulty::Easy,
            education_level: EducationLevel::High,
            questions: correct.iter().copied().map(question).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::{Difficulty, EducationLevel};
    use validator::Validate;

    #[test]
    fn test_fixture_params_are_valid() {
        let params = quiz_params("History", EducationLevel::College, 5, Difficulty::Hard);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_fixture_quiz_payload_has_requested_questions() {
        let payload = quiz_payload_json(3);
        assert_eq!(payload["questions"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_fixture_quiz_resolves_every_answer() {
        let quiz = quiz("Geography", &[0, 3]);
        assert!(quiz.questions.iter().all(|q| q.correct_answer().is_some()));
    }
}
