use async_graphql::{Context, ErrorExtensions, Object};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ExplanationParams, QuizParams},
        response::{ExplanationResponse, QuizResponse},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_quiz(
        &self,
        ctx: &Context<'_>,
        input: QuizParams,
    ) -> async_graphql::Result<QuizResponse> {
        let state = ctx.data::<AppState>()?;
        state
            .generation_service
            .generate_quiz(input)
            .await
            .map_err(|e: AppError| e.extend())
    }

    async fn explain_topic(
        &self,
        ctx: &Context<'_>,
        input: ExplanationParams,
    ) -> async_graphql::Result<ExplanationResponse> {
        let state = ctx.data::<AppState>()?;
        state
            .generation_service
            .explain_topic(input)
            .await
            .map_err(|e: AppError| e.extend())
    }
}
