use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-1.5-flash";

/// Fixed sampling parameters sent with every generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: Option<u32>,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.7,
            top_p: 1.0,
            top_k: None,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub app_env: String,
    pub cors_allowed_origin: Option<String>,
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub generation: GenerationSettings,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = GenerationSettings::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            llm_api_key: SecretString::from(env::var("LLM_API_KEY").unwrap_or_default()),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            generation: GenerationSettings {
                model: env::var("LLM_MODEL").unwrap_or(defaults.model),
                temperature: parse_env("LLM_TEMPERATURE").unwrap_or(defaults.temperature),
                top_p: parse_env("LLM_TOP_P").unwrap_or(defaults.top_p),
                top_k: parse_env("LLM_TOP_K").or(defaults.top_k),
                max_output_tokens: parse_env("LLM_MAX_OUTPUT_TOKENS")
                    .unwrap_or(defaults.max_output_tokens),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Error payloads carry a debug block everywhere except production.
    pub fn include_debug(&self) -> bool {
        !self.is_production()
    }

    /// Checks that production-critical configuration is set.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if !self.is_production() {
            return Ok(());
        }

        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "LLM_API_KEY is not set. Set the LLM_API_KEY environment variable.".to_string(),
            ));
        }

        if self.generation.model.trim().is_empty() {
            return Err(AppError::ConfigError("LLM_MODEL must not be empty".to_string()));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            app_env: "test".to_string(),
            cors_allowed_origin: None,
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://localhost:9999/v1".to_string(),
            generation: GenerationSettings::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
