use std::time::Duration;

use validator::Validate;

use crate::errors::{AppResult, GenerationError};
use crate::models::dto::request::{ExplanationParams, QuizParams};
use crate::models::dto::response::{ExplanationResponse, QuizResponse};
use crate::services::orchestrator::{
    ContentPipeline, ExplanationOrchestrator, Generated, GenerationMode, Orchestrator,
    QuizOrchestrator,
};

pub struct GenerationService {
    quiz: QuizOrchestrator,
    explanation: ExplanationOrchestrator,
    deadline: Duration,
}

impl GenerationService {
    pub fn new(
        quiz: QuizOrchestrator,
        explanation: ExplanationOrchestrator,
        deadline: Duration,
    ) -> Self {
        Self {
            quiz,
            explanation,
            deadline,
        }
    }

    pub fn mode(&self) -> GenerationMode {
        self.quiz.mode()
    }

    pub async fn generate_quiz(&self, params: QuizParams) -> AppResult<QuizResponse> {
        params.validate()?;
        log::info!(
            "Generating {} question {} quiz on '{}' for level {}",
            params.question_count,
            params.difficulty,
            params.subject(),
            params.education_level
        );

        let generated = run_with_deadline(&self.quiz, &params, self.deadline).await?;
        Ok(generated.into())
    }

    pub async fn explain_topic(&self, params: ExplanationParams) -> AppResult<ExplanationResponse> {
        params.validate()?;
        log::info!(
            "Generating {} explanation of '{}'",
            params.explanation_style,
            params.topic()
        );

        let generated = run_with_deadline(&self.explanation, &params, self.deadline).await?;
        Ok(generated.into())
    }
}

/// Expiry counts as an unavailable service and goes through the same policy.
async fn run_with_deadline<P: ContentPipeline>(
    orchestrator: &Orchestrator<P>,
    params: &P::Params,
    deadline: Duration,
) -> AppResult<Generated<P::Output>> {
    match tokio::time::timeout(deadline, orchestrator.generate(params)).await {
        Ok(result) => result,
        Err(_) => orchestrator.recover(
            params,
            GenerationError::Unavailable(format!(
                "no reply within {} ms",
                deadline.as_millis()
            )),
        ),
    }
}
