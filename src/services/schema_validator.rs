use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::errors::GenerationError;
use crate::models::domain::{Explanation, ExplanationItem, ExplanationSection, Quiz, QuizQuestion};
use crate::models::dto::payload::{
    ExplanationPayload, ItemPayload, QuestionPayload, QuizPayload, SectionPayload,
};
use crate::models::dto::request::{ExplanationParams, QuizParams};

fn schema_error(message: impl Into<String>) -> GenerationError {
    GenerationError::Schema(message.into())
}

fn parse_object<T: DeserializeOwned>(payload: &str) -> Result<T, GenerationError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| GenerationError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(schema_error("top-level value must be a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| schema_error(e.to_string()))
}

fn require_text(value: &str, field: &str) -> Result<String, GenerationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(schema_error(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks a generated quiz payload and converts it into a [`Quiz`].
///
/// The payload must hold exactly the requested number of questions; a
/// missing title or description is filled in from the request.
pub fn validate_quiz(payload: &str, params: &QuizParams) -> Result<Quiz, GenerationError> {
    let payload: QuizPayload = parse_object(payload)?;

    let expected = params.question_count as usize;
    if payload.questions.len() != expected {
        return Err(schema_error(format!(
            "expected {} questions, found {}",
            expected,
            payload.questions.len()
        )));
    }

    let questions = payload
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| check_question(index, question))
        .collect::<Result<Vec<_>, _>>()?;

    let subject = params.subject().to_string();
    Ok(Quiz {
        title: optional_text(payload.title)
            .unwrap_or_else(|| Quiz::default_title(&subject, params.education_level)),
        description: optional_text(payload.description).unwrap_or_else(|| {
            Quiz::default_description(&subject, params.topics(), params.difficulty)
        }),
        subject,
        difficulty: params.difficulty,
        education_level: params.education_level,
        questions,
    })
}

fn check_question(index: usize, question: QuestionPayload) -> Result<QuizQuestion, GenerationError> {
    question
        .validate()
        .map_err(|e| schema_error(format!("questions[{}]: {}", index, e)))?;

    let text = require_text(&question.question, &format!("questions[{}].question", index))?;
    let explanation = require_text(
        &question.explanation,
        &format!("questions[{}].explanation", index),
    )?;

    let mut seen = HashSet::new();
    let mut answers = Vec::with_capacity(question.answers.len());
    for (answer_index, answer) in question.answers.iter().enumerate() {
        let answer = require_text(
            answer,
            &format!("questions[{}].answers[{}]", index, answer_index),
        )?;
        if !seen.insert(answer.to_lowercase()) {
            return Err(schema_error(format!(
                "questions[{}] has duplicate answer '{}'",
                index, answer
            )));
        }
        answers.push(answer);
    }

    let correct_answer_index = u8::try_from(question.correct_answer_index).map_err(|_| {
        schema_error(format!("questions[{}].correctAnswerIndex out of range", index))
    })?;

    Ok(QuizQuestion {
        question: text,
        answers,
        correct_answer_index,
        explanation,
    })
}

/// Checks a generated explanation payload and converts it into an [`Explanation`].
pub fn validate_explanation(
    payload: &str,
    params: &ExplanationParams,
) -> Result<Explanation, GenerationError> {
    let payload: ExplanationPayload = parse_object(payload)?;
    payload.validate().map_err(|e| schema_error(e.to_string()))?;

    let content = payload
        .content
        .into_iter()
        .enumerate()
        .map(|(index, section)| check_section(index, section))
        .collect::<Result<Vec<_>, _>>()?;

    let key_points = payload
        .key_points
        .map(|points| {
            points
                .iter()
                .enumerate()
                .map(|(index, point)| require_text(point, &format!("keyPoints[{}]", index)))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(Explanation {
        title: require_text(&payload.title, "title")?,
        description: optional_text(payload.description),
        topic: params.topic().to_string(),
        education_level: params.education_level,
        content,
        key_points,
        examples: check_items(payload.examples, "examples")?,
        related_topics: check_items(payload.related_topics, "relatedTopics")?,
    })
}

fn check_section(index: usize, section: SectionPayload) -> Result<ExplanationSection, GenerationError> {
    section
        .validate()
        .map_err(|e| schema_error(format!("content[{}]: {}", index, e)))?;

    let paragraphs = section
        .paragraphs
        .iter()
        .enumerate()
        .map(|(p, paragraph)| {
            require_text(paragraph, &format!("content[{}].paragraphs[{}]", index, p))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExplanationSection {
        title: require_text(&section.title, &format!("content[{}].title", index))?,
        paragraphs,
    })
}

fn check_items(
    items: Option<Vec<ItemPayload>>,
    field: &str,
) -> Result<Option<Vec<ExplanationItem>>, GenerationError> {
    items
        .map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    Ok(ExplanationItem {
                        title: require_text(&item.title, &format!("{}[{}].title", field, index))?,
                        description: require_text(
                            &item.description,
                            &format!("{}[{}].description", field, index),
                        )?,
                    })
                })
                .collect::<Result<Vec<_>, GenerationError>>()
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, EducationLevel, ExplanationStyle};
    use crate::test_utils::fixtures::{self, question_json as question, quiz_payload_json as quiz_payload};
    use serde_json::json;

    fn quiz_params(count: u32) -> QuizParams {
        fixtures::quiz_params("Mathematics", EducationLevel::High, count, Difficulty::Medium)
    }

    fn explanation_params() -> ExplanationParams {
        fixtures::explanation_params(
            "Photosynthesis",
            Some(EducationLevel::Middle),
            ExplanationStyle::Simple,
        )
    }

    #[test]
    fn accepts_well_formed_quiz() {
        let quiz = validate_quiz(&quiz_payload(3).to_string(), &quiz_params(3))
            .expect("payload should validate");

        assert_eq!(quiz.title, "Algebra Basics");
        assert_eq!(quiz.subject, "Mathematics");
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[2].correct_answer_index, 2);
    }

    #[test]
    fn fills_missing_title_and_description() {
        let payload = json!({ "questions": [question(0)] });
        let quiz = validate_quiz(&payload.to_string(), &quiz_params(1))
            .expect("payload should validate");

        assert_eq!(quiz.title, "Mathematics Quiz (High School)");
        assert_eq!(quiz.description, "A medium level quiz on Mathematics concepts.");
    }

    #[test]
    fn rejects_wrong_question_count() {
        let err = validate_quiz(&quiz_payload(2).to_string(), &quiz_params(3))
            .expect_err("count mismatch should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_invalid_json_as_parse_error() {
        let err = validate_quiz("{\"questions\": [", &quiz_params(1)).expect_err("should fail");
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn rejects_top_level_array() {
        let err = validate_quiz("[]", &quiz_params(1)).expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_three_answers() {
        let mut payload = quiz_payload(1);
        payload["questions"][0]["answers"] = json!(["a", "b", "c"]);
        let err = validate_quiz(&payload.to_string(), &quiz_params(1)).expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_out_of_range_answer_index() {
        for index in [json!(4), json!(-1)] {
            let mut payload = quiz_payload(1);
            payload["questions"][0]["correctAnswerIndex"] = index;
            let err =
                validate_quiz(&payload.to_string(), &quiz_params(1)).expect_err("should fail");
            assert!(matches!(err, GenerationError::Schema(_)));
        }
    }

    #[test]
    fn rejects_duplicate_answers() {
        let mut payload = quiz_payload(1);
        payload["questions"][0]["answers"] = json!(["same", "Same", "other", "more"]);
        let err = validate_quiz(&payload.to_string(), &quiz_params(1)).expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_blank_question_text() {
        let mut payload = quiz_payload(1);
        payload["questions"][0]["question"] = json!("   ");
        let err = validate_quiz(&payload.to_string(), &quiz_params(1)).expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn accepts_well_formed_explanation() {
        let payload = json!({
            "title": "Photosynthesis",
            "content": [{ "title": "Overview", "paragraphs": ["Plants make sugar."] }],
            "keyPoints": ["Light is required"],
            "relatedTopics": [{ "title": "Respiration", "description": "The reverse process" }],
        });

        let explanation = validate_explanation(&payload.to_string(), &explanation_params())
            .expect("payload should validate");

        assert_eq!(explanation.topic, "Photosynthesis");
        assert_eq!(explanation.education_level, Some(EducationLevel::Middle));
        assert_eq!(explanation.content[0].paragraphs.len(), 1);
        assert!(explanation.examples.is_none());
        assert_eq!(explanation.related_topics.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn rejects_explanation_without_sections() {
        let payload = json!({ "title": "Photosynthesis", "content": [] });
        let err = validate_explanation(&payload.to_string(), &explanation_params())
            .expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_section_without_paragraphs() {
        let payload = json!({
            "title": "Photosynthesis",
            "content": [{ "title": "Overview", "paragraphs": [] }],
        });
        let err = validate_explanation(&payload.to_string(), &explanation_params())
            .expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn rejects_explanation_missing_title() {
        let payload = json!({ "content": [{ "title": "Overview", "paragraphs": ["x"] }] });
        let err = validate_explanation(&payload.to_string(), &explanation_params())
            .expect_err("should fail");
        assert!(matches!(err, GenerationError::Schema(_)));
    }
}
