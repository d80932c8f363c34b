use actix_web::{get, HttpResponse};

use crate::models::dto::response::CatalogDto;

#[get("/api/catalog")]
async fn get_catalog() -> HttpResponse {
    HttpResponse::Ok().json(CatalogDto::build())
}
