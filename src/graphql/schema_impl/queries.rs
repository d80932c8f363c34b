use async_graphql::{Context, Object};

use crate::{app_state::AppState, errors::AppResult, models::dto::response::CatalogDto};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn catalog(&self) -> CatalogDto {
        CatalogDto::build()
    }

    /// Current failure policy, `strict` or `fallback`.
    async fn generation_mode(&self, ctx: &Context<'_>) -> AppResult<String> {
        let state = ctx.data::<AppState>()?;
        Ok(state.generation_service.mode().to_string())
    }
}
