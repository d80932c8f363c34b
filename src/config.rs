use std::env;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};
use crate::services::orchestrator::GenerationMode;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub ai_api_key: Option<SecretString>,
    pub ai_api_base: String,
    pub ai_model: String,
    pub ai_temperature: f32,
    pub generation_enabled: bool,
    pub generation_mode: GenerationMode,
    pub generation_timeout_secs: u64,
    pub fallback_seed: Option<u64>,
    pub cors_allowed_origin: Option<String>,
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}='{}', using default", key, value);
            default
        }),
        None => default,
    }
}

fn parse_optional<T: FromStr>(raw: Option<String>, key: &str) -> Option<T> {
    let value = non_empty(raw)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring invalid {}='{}'", key, value);
            None
        }
    }
}

fn parse_flag(raw: Option<String>, key: &str, default: bool) -> bool {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Some(v) => {
            log::warn!("Ignoring invalid {}='{}', using default", key, v);
            default
        }
        None => default,
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or invalid values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            web_server_host: non_empty(lookup("WEB_SERVER_HOST"))
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: parse_or(lookup("WEB_SERVER_PORT"), "WEB_SERVER_PORT", 8080),
            ai_api_key: non_empty(lookup("AI_API_KEY")).map(SecretString::from),
            ai_api_base: non_empty(lookup("AI_API_BASE"))
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            ai_model: non_empty(lookup("AI_MODEL")).unwrap_or_else(|| "gpt-4o-mini".to_string()),
            ai_temperature: parse_or(lookup("AI_TEMPERATURE"), "AI_TEMPERATURE", 0.7),
            generation_enabled: parse_flag(
                lookup("AI_GENERATION_ENABLED"),
                "AI_GENERATION_ENABLED",
                true,
            ),
            generation_mode: parse_or(
                lookup("GENERATION_MODE"),
                "GENERATION_MODE",
                GenerationMode::default(),
            ),
            generation_timeout_secs: parse_or(
                lookup("GENERATION_TIMEOUT_SECS"),
                "GENERATION_TIMEOUT_SECS",
                60,
            ),
            fallback_seed: parse_optional(lookup("FALLBACK_SEED"), "FALLBACK_SEED"),
            cors_allowed_origin: non_empty(lookup("CORS_ALLOWED_ORIGIN")),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Rejects settings the server cannot run with and warns about odd ones.
    pub fn validate_for_startup(&self) -> AppResult<()> {
        if self.generation_timeout_secs == 0 {
            return Err(AppError::InternalError(
                "GENERATION_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.ai_temperature) {
            return Err(AppError::InternalError(format!(
                "AI_TEMPERATURE must be between 0 and 2, got {}",
                self.ai_temperature
            )));
        }

        if self.generation_enabled && self.ai_api_key.is_none() {
            log::warn!(
                "AI_API_KEY is not set; every generation attempt will fail with an auth error"
            );
        }

        if !self.generation_enabled && self.generation_mode == GenerationMode::Strict {
            log::warn!("Generation is disabled in strict mode; every request will fail");
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            ai_api_key: Some(SecretString::from("test-key".to_string())),
            ai_api_base: "http://127.0.0.1:9".to_string(),
            ai_model: "test-model".to_string(),
            ai_temperature: 0.2,
            generation_enabled: false,
            generation_mode: GenerationMode::Fallback,
            generation_timeout_secs: 5,
            fallback_seed: Some(7),
            cors_allowed_origin: None,
        }
    }
}
