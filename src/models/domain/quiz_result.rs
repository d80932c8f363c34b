use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    /// Whole-number percentage, rounded half away from zero.
    pub percentage: u32,
    pub results: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub index: u32,
    pub selected_answer_index: Option<u8>,
    pub correct_answer_index: u8,
    pub is_correct: bool,
}
