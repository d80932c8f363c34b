use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::education::EducationLevel;

/// Structured explanation of a topic, rendered section by section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    pub content: Vec<ExplanationSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExplanationItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_topics: Option<Vec<ExplanationItem>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ExplanationSection {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// A titled blurb, used for both examples and related topics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ExplanationItem {
    pub title: String,
    pub description: String,
}
