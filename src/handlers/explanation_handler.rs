use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::ExplanationParams,
};

#[post("/api/explanations")]
async fn explain_topic(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ExplanationParams>,
) -> Result<HttpResponse, AppError> {
    log::debug!(
        "[{}] explanation requested",
        get_request_id(&req).unwrap_or_default()
    );

    let response = state
        .generation_service
        .explain_topic(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
