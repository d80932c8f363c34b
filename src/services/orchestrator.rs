use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use crate::errors::{AppError, AppResult, GenerationError};
use crate::models::domain::{ContentSource, Explanation, Quiz};
use crate::models::dto::request::{ExplanationParams, QuizParams};
use crate::services::fallback;
use crate::services::generation_client::GenerationClient;
use crate::services::request_builder::{self, Instruction};
use crate::services::response_extractor;
use crate::services::schema_validator;

/// What to do when a generation attempt fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    /// Surface the failure to the caller.
    Strict,
    /// Answer with local fallback content instead.
    #[default]
    Fallback,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Strict => "strict",
            GenerationMode::Fallback => "fallback",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(GenerationMode::Strict),
            "fallback" => Ok(GenerationMode::Fallback),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Building,
    Invoking,
    Extracting,
    Validating,
    Succeeded,
    FallenBack,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Idle => write!(f, "idle"),
            PipelineStage::Building => write!(f, "building"),
            PipelineStage::Invoking => write!(f, "invoking"),
            PipelineStage::Extracting => write!(f, "extracting"),
            PipelineStage::Validating => write!(f, "validating"),
            PipelineStage::Succeeded => write!(f, "succeeded"),
            PipelineStage::FallenBack => write!(f, "fallen_back"),
            PipelineStage::Failed => write!(f, "failed"),
        }
    }
}

/// Content delivered by one orchestrator run.
#[derive(Debug, Clone)]
pub struct Generated<T> {
    pub content: T,
    pub source: ContentSource,
    pub stage: PipelineStage,
    /// The failure that triggered fallback content, if any.
    pub fallback_reason: Option<GenerationError>,
}

/// One kind of generated content: how to ask for it, check it, and replace it.
pub trait ContentPipeline: Send + Sync + 'static {
    type Params: Send + Sync;
    type Output: Send;

    const KIND: &'static str;
    const FAILURE_MESSAGE: &'static str;

    fn build(params: &Self::Params) -> Instruction;
    fn validate(payload: &str, params: &Self::Params) -> Result<Self::Output, GenerationError>;
    fn fallback(params: &Self::Params, rng: &mut StdRng) -> Self::Output;
}

pub struct QuizPipeline;

impl ContentPipeline for QuizPipeline {
    type Params = QuizParams;
    type Output = Quiz;

    const KIND: &'static str = "quiz";
    const FAILURE_MESSAGE: &'static str = "Failed to generate quiz. Please try again.";

    fn build(params: &QuizParams) -> Instruction {
        request_builder::build_quiz_instruction(params)
    }

    fn validate(payload: &str, params: &QuizParams) -> Result<Quiz, GenerationError> {
        schema_validator::validate_quiz(payload, params)
    }

    fn fallback(params: &QuizParams, rng: &mut StdRng) -> Quiz {
        fallback::generate_quiz(params, rng)
    }
}

pub struct ExplanationPipeline;

impl ContentPipeline for ExplanationPipeline {
    type Params = ExplanationParams;
    type Output = Explanation;

    const KIND: &'static str = "explanation";
    const FAILURE_MESSAGE: &'static str = "Failed to generate explanation. Please try again.";

    fn build(params: &ExplanationParams) -> Instruction {
        request_builder::build_explanation_instruction(params)
    }

    fn validate(payload: &str, params: &ExplanationParams) -> Result<Explanation, GenerationError> {
        schema_validator::validate_explanation(payload, params)
    }

    fn fallback(params: &ExplanationParams, _rng: &mut StdRng) -> Explanation {
        fallback::generate_explanation(params)
    }
}

/// Runs build, invoke, extract and validate for one pipeline and applies
/// the configured failure policy.
pub struct Orchestrator<P: ContentPipeline> {
    client: Option<Arc<dyn GenerationClient>>,
    mode: GenerationMode,
    fallback_seed: Option<u64>,
    pipeline: PhantomData<fn() -> P>,
}

pub type QuizOrchestrator = Orchestrator<QuizPipeline>;
pub type ExplanationOrchestrator = Orchestrator<ExplanationPipeline>;

impl<P: ContentPipeline> Orchestrator<P> {
    /// `None` for the client means generation is disabled and every
    /// request goes straight to the failure policy.
    pub fn new(client: Option<Arc<dyn GenerationClient>>, mode: GenerationMode) -> Self {
        Self {
            client,
            mode,
            fallback_seed: None,
            pipeline: PhantomData,
        }
    }

    pub fn with_fallback_seed(mut self, seed: Option<u64>) -> Self {
        self.fallback_seed = seed;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub async fn generate(&self, params: &P::Params) -> AppResult<Generated<P::Output>> {
        log::debug!("{} pipeline: {}", P::KIND, PipelineStage::Building);
        let instruction = P::build(params);

        match self.attempt(&instruction, params).await {
            Ok(content) => {
                log::info!("{} pipeline: {}", P::KIND, PipelineStage::Succeeded);
                Ok(Generated {
                    content,
                    source: ContentSource::Generated,
                    stage: PipelineStage::Succeeded,
                    fallback_reason: None,
                })
            }
            Err(err) => self.recover(params, err),
        }
    }

    async fn attempt(
        &self,
        instruction: &Instruction,
        params: &P::Params,
    ) -> Result<P::Output, GenerationError> {
        let client = self.client.as_ref().ok_or_else(|| {
            GenerationError::Unavailable("generation client is disabled".to_string())
        })?;

        log::debug!("{} pipeline: {}", P::KIND, PipelineStage::Invoking);
        let raw = client.invoke(instruction).await?;

        log::debug!("{} pipeline: {}", P::KIND, PipelineStage::Extracting);
        let payload = response_extractor::extract(&raw)?;

        log::debug!("{} pipeline: {}", P::KIND, PipelineStage::Validating);
        P::validate(payload, params)
    }

    /// Applies the failure policy to an abandoned attempt.
    pub fn recover(
        &self,
        params: &P::Params,
        err: GenerationError,
    ) -> AppResult<Generated<P::Output>> {
        log_failure::<P>(&err);

        match self.mode {
            GenerationMode::Strict => {
                log::debug!("{} pipeline: {}", P::KIND, PipelineStage::Failed);
                Err(AppError::GenerationFailed(P::FAILURE_MESSAGE.to_string()))
            }
            GenerationMode::Fallback => {
                let mut rng = self.fallback_rng();
                let content = P::fallback(params, &mut rng);
                log::info!(
                    "{} pipeline: {} after {} failure",
                    P::KIND,
                    PipelineStage::FallenBack,
                    err.kind()
                );
                Ok(Generated {
                    content,
                    source: ContentSource::Fallback,
                    stage: PipelineStage::FallenBack,
                    fallback_reason: Some(err),
                })
            }
        }
    }

    fn fallback_rng(&self) -> StdRng {
        match self.fallback_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn log_failure<P: ContentPipeline>(err: &GenerationError) {
    match err {
        GenerationError::Auth(_) => log::error!(
            "{} generation rejected credentials while {}: {}",
            P::KIND,
            err.stage(),
            err
        ),
        GenerationError::Quota(_) => log::warn!(
            "{} generation is out of quota while {}: {}",
            P::KIND,
            err.stage(),
            err
        ),
        _ => log::warn!(
            "{} generation failed while {} ({}): {}",
            P::KIND,
            err.stage(),
            err.kind(),
            err
        ),
    }
}
