use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

use crate::services::orchestrator::PipelineStage;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_graphql::Error> for AppError {
    fn from(err: async_graphql::Error) -> Self {
        AppError::InternalError(err.message)
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a single generation attempt failed.
///
/// These never reach a caller directly. The orchestrator either recovers
/// with fallback content or collapses them into
/// [`AppError::GenerationFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    #[error("generation service rejected the credentials: {0}")]
    Auth(String),

    #[error("generation quota exhausted: {0}")]
    Quota(String),

    #[error("generation service returned no content")]
    EmptyResponse,

    #[error("no usable JSON payload in response: {0}")]
    MalformedResponse(String),

    #[error("payload is not valid JSON: {0}")]
    Parse(String),

    #[error("payload does not match the expected shape: {0}")]
    Schema(String),
}

impl GenerationError {
    /// Stage at which the attempt was abandoned.
    pub fn stage(&self) -> PipelineStage {
        match self {
            GenerationError::Unavailable(_)
            | GenerationError::Auth(_)
            | GenerationError::Quota(_)
            | GenerationError::EmptyResponse => PipelineStage::Invoking,
            GenerationError::MalformedResponse(_) => PipelineStage::Extracting,
            GenerationError::Parse(_) | GenerationError::Schema(_) => PipelineStage::Validating,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Unavailable(_) => "unavailable",
            GenerationError::Auth(_) => "auth",
            GenerationError::Quota(_) => "quota",
            GenerationError::EmptyResponse => "empty_response",
            GenerationError::MalformedResponse(_) => "malformed_response",
            GenerationError::Parse(_) => "parse",
            GenerationError::Schema(_) => "schema",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::GenerationFailed("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InternalError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ValidationError("subject is required".into());
        assert_eq!(err.to_string(), "Validation error: subject is required");

        let err = AppError::GenerationFailed("Failed to generate quiz".into());
        assert_eq!(err.to_string(), "Failed to generate quiz");
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = AppError::GenerationFailed("Failed to generate quiz".into()).extend();
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(
            code,
            Some(async_graphql::Value::String("GENERATION_FAILED".into()))
        );
    }

    #[test]
    fn test_generation_error_stages() {
        assert_eq!(
            GenerationError::Auth("bad key".into()).stage(),
            PipelineStage::Invoking
        );
        assert_eq!(GenerationError::EmptyResponse.stage(), PipelineStage::Invoking);
        assert_eq!(
            GenerationError::MalformedResponse("no braces".into()).stage(),
            PipelineStage::Extracting
        );
        assert_eq!(
            GenerationError::Schema("missing questions".into()).stage(),
            PipelineStage::Validating
        );
    }
}
