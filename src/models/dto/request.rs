use async_graphql::InputObject;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, EducationLevel, ExplanationStyle, Quiz};

pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const MAX_QUESTION_COUNT: u32 = 50;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizParams {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub subject: String,

    pub education_level: EducationLevel,

    /// Free-text focus area, also used as a keyword filter for fallback questions.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub topics: Option<String>,

    #[serde(default = "default_question_count")]
    #[graphql(default = 10)]
    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,

    #[serde(default)]
    #[graphql(default)]
    pub difficulty: Difficulty,
}

impl QuizParams {
    pub fn subject(&self) -> &str {
        self.subject.trim()
    }

    pub fn topics(&self) -> Option<&str> {
        non_empty(self.topics.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationParams {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub topic: String,

    #[serde(default)]
    pub education_level: Option<EducationLevel>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub specific_questions: Option<String>,

    #[serde(default)]
    #[graphql(default)]
    pub explanation_style: ExplanationStyle,
}

impl ExplanationParams {
    pub fn topic(&self) -> &str {
        self.topic.trim()
    }

    pub fn specific_questions(&self) -> Option<&str> {
        non_empty(self.specific_questions.as_ref())
    }
}

/// A quiz as delivered plus the learner's picks, one per question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeQuizRequest {
    pub quiz: Quiz,
    pub selected_answers: Vec<Option<u8>>,
}
