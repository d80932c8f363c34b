use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    models::dto::response::{HealthResponse, ReadinessResponse},
};

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

#[get("/health/live")]
async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "alive" })
}

/// Always ready: fallback content needs no upstream, and strict mode reports per request.
#[get("/health/ready")]
async fn readiness(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ready",
        generation_enabled: state.config.generation_enabled,
        generation_mode: state.generation_service.mode().to_string(),
    })
}
