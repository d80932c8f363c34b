pub mod fallback;
pub mod generation_client;
pub mod generation_service;
pub mod grading_service;
pub mod orchestrator;
pub mod request_builder;
pub mod response_extractor;
pub mod schema_validator;
