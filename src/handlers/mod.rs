pub mod catalog_handler;
pub mod explanation_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use catalog_handler::get_catalog;
pub use explanation_handler::explain_topic;
pub use graphql_handler::{graphiql, graphql};
pub use health_handler::{health_check, liveness, readiness};
pub use quiz_handler::{generate_quiz, grade_quiz};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(liveness)
        .service(readiness)
        .service(get_catalog)
        .service(generate_quiz)
        .service(grade_quiz)
        .service(explain_topic)
        .service(graphql)
        .service(graphiql);
}

/// Malformed JSON bodies surface as validation errors with the usual `{error, code}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
