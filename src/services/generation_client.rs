use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult, GenerationError};
use crate::services::request_builder::Instruction;

#[cfg(test)]
use mockall::automock;

/// Sends one instruction to a text-generation backend and returns its raw reply.
///
/// Implementations make exactly one attempt and never look inside the reply.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn invoke(&self, instruction: &Instruction) -> Result<String, GenerationError>;
}

#[derive(Clone, Debug)]
pub struct ClientSettings {
    pub api_base: String,
    pub api_key: Option<SecretString>,
    pub model: String,
    pub temperature: f32,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_base: config.ai_api_base.clone(),
            api_key: config.ai_api_key.clone(),
            model: config.ai_model.clone(),
            temperature: config.ai_temperature,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(default)]
    error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiCompatibleClient {
    http: Client,
    settings: ClientSettings,
}

impl OpenAiCompatibleClient {
    pub fn new(settings: ClientSettings) -> AppResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GenerationClient for OpenAiCompatibleClient {
    async fn invoke(&self, instruction: &Instruction) -> Result<String, GenerationError> {
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .ok_or_else(|| GenerationError::Auth("no API key configured".to_string()))?;

        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: instruction.system,
                },
                ChatMessage {
                    role: "user",
                    content: &instruction.text,
                },
            ],
            temperature: self.settings.temperature,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status, &text));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            GenerationError::Unavailable(format!("unexpected completion envelope: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(content)
    }
}

/// Maps a non-success reply onto the failure taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    let detail = envelope
        .error
        .message
        .clone()
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    let quota_code = [envelope.error.code.as_deref(), envelope.error.kind.as_deref()]
        .into_iter()
        .flatten()
        .any(|code| code == "insufficient_quota");

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::Quota(detail),
        _ if quota_code => GenerationError::Quota(detail),
        _ => GenerationError::Unavailable(detail),
    }
}
