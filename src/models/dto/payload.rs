//! Shapes the generation service is asked to return.
//!
//! These types double as the JSON Schema embedded in prompts and as the
//! first decoding step of validation. Field-level rules live in the
//! `validate` attributes; cross-field rules live in the schema validator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(equal = 4))]
    pub answers: Vec<String>,
    #[validate(range(min = 0, max = 3))]
    pub correct_answer_index: i64,
    #[validate(length(min = 1))]
    pub explanation: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub content: Vec<SectionPayload>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
    #[serde(default)]
    pub examples: Option<Vec<ItemPayload>>,
    #[serde(default)]
    pub related_topics: Option<Vec<ItemPayload>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct SectionPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct ItemPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}
