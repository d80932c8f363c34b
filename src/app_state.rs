use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        generation_client::{ClientSettings, GenerationClient, OpenAiCompatibleClient},
        generation_service::GenerationService,
        orchestrator::{ExplanationOrchestrator, QuizOrchestrator},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client: Option<Arc<dyn GenerationClient>> = if config.generation_enabled {
            let client = OpenAiCompatibleClient::new(ClientSettings::from_config(&config))?;
            log::info!(
                "Generation client ready (model {}, endpoint {})",
                config.ai_model,
                config.ai_api_base
            );
            Some(Arc::new(client))
        } else {
            log::warn!("Generation is disabled; requests follow the {} policy", config.generation_mode);
            None
        };

        Ok(Self::with_client(config, client))
    }

    /// Wires the services around an arbitrary client.
    pub fn with_client(config: Config, client: Option<Arc<dyn GenerationClient>>) -> Self {
        let quiz = QuizOrchestrator::new(client.clone(), config.generation_mode)
            .with_fallback_seed(config.fallback_seed);
        let explanation = ExplanationOrchestrator::new(client, config.generation_mode)
            .with_fallback_seed(config.fallback_seed);
        let generation_service = Arc::new(GenerationService::new(
            quiz,
            explanation,
            config.generation_timeout(),
        ));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}
