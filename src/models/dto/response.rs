use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    ContentSource, Difficulty, EducationLevel, Explanation, ExplanationStyle, Quiz,
};
use crate::services::fallback::banks::KnownSubject;
use crate::services::orchestrator::Generated;

pub const DEGRADED_NOTICE: &str =
    "The AI service is currently unavailable, so sample content is shown instead.";

/// Envelope around generated content telling the caller whether it is degraded.
#[derive(Debug, Serialize, SimpleObject)]
#[graphql(concrete(name = "QuizResponse", params(Quiz)))]
#[graphql(concrete(name = "ExplanationResponse", params(Explanation)))]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse<T: async_graphql::OutputType> {
    pub data: T,
    pub source: ContentSource,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl<T: async_graphql::OutputType> From<Generated<T>> for GenerationResponse<T> {
    fn from(generated: Generated<T>) -> Self {
        let degraded = generated.source == ContentSource::Fallback;
        GenerationResponse {
            data: generated.content,
            source: generated.source,
            degraded,
            notice: degraded.then(|| DEGRADED_NOTICE.to_string()),
            generated_at: Utc::now(),
        }
    }
}

pub type QuizResponse = GenerationResponse<Quiz>;
pub type ExplanationResponse = GenerationResponse<Explanation>;

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

/// Selectable values for the generation forms.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    pub education_levels: Vec<CatalogOption>,
    pub difficulties: Vec<CatalogOption>,
    pub explanation_styles: Vec<CatalogOption>,
    pub fallback_subjects: Vec<String>,
}

impl CatalogDto {
    pub fn build() -> Self {
        CatalogDto {
            education_levels: EducationLevel::ALL
                .iter()
                .map(|level| option(level.as_str(), level.label()))
                .collect(),
            difficulties: Difficulty::ALL
                .iter()
                .map(|difficulty| option(difficulty.as_str(), difficulty.label()))
                .collect(),
            explanation_styles: ExplanationStyle::ALL
                .iter()
                .map(|style| option(style.as_str(), style.label()))
                .collect(),
            fallback_subjects: KnownSubject::ALL
                .iter()
                .map(|subject| subject.display_name().to_string())
                .collect(),
        }
    }
}

fn option(value: &str, label: &str) -> CatalogOption {
    CatalogOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub generation_enabled: bool,
    pub generation_mode: String,
}
