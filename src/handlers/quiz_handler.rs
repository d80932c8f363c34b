use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GradeQuizRequest, QuizParams},
    services::grading_service::GradingService,
};

#[post("/api/quizzes/generate")]
async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizParams>,
) -> Result<HttpResponse, AppError> {
    log::debug!(
        "[{}] quiz generation requested",
        get_request_id(&req).unwrap_or_default()
    );

    let response = state
        .generation_service
        .generate_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quizzes/grade")]
async fn grade_quiz(request: web::Json<GradeQuizRequest>) -> Result<HttpResponse, AppError> {
    let GradeQuizRequest {
        quiz,
        selected_answers,
    } = request.into_inner();

    let result = GradingService::grade(&quiz, &selected_answers)?;
    Ok(HttpResponse::Ok().json(result))
}
