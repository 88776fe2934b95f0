use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::GenerationSettings,
    errors::{AppError, AppResult},
};

/// Outbound text-completion service. One prompt in, one completion out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiTextGenerator {
    client: Client<OpenAIConfig>,
    settings: GenerationSettings,
}

impl OpenAiTextGenerator {
    pub fn new(api_base: &str, api_key: &SecretString, settings: GenerationSettings) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key.expose_secret());

        Self {
            client: Client::with_config(config),
            settings,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        build_request_body(&self.settings, prompt)
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(prompt))
            .await?;

        completion_text(&response).ok_or_else(|| {
            AppError::GenerationServiceError(format!(
                "model {} returned no completion text",
                self.settings.model
            ))
        })
    }
}

pub fn build_request_body(settings: &GenerationSettings, prompt: &str) -> Value {
    let mut body = json!({
        "model": settings.model,
        "messages": [{ "role": "user", "content": prompt }],
        "temperature": settings.temperature,
        "top_p": settings.top_p,
        "max_tokens": settings.max_output_tokens,
    });

    if let Some(top_k) = settings.top_k {
        body["top_k"] = json!(top_k);
    }

    body
}

/// First choice's message content, if it holds any text.
pub fn completion_text(response: &Value) -> Option<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_generation_settings() {
        let settings = GenerationSettings::default();
        let body = build_request_body(&settings, "Generate 10 essay questions.");

        assert_eq!(body["model"], "gemini-1.5-flash");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Generate 10 essay questions.");
        assert_eq!(body["max_tokens"], 2048);
        assert_eq!(body["top_p"], 1.0);
        assert!(body.get("top_k").is_none());
    }

    #[test]
    fn request_body_includes_top_k_when_configured() {
        let settings = GenerationSettings {
            top_k: Some(1),
            ..GenerationSettings::default()
        };

        let body = build_request_body(&settings, "prompt");
        assert_eq!(body["top_k"], 1);
    }

    #[test]
    fn completion_text_reads_first_choice() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"questions\":[]}" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        });

        assert_eq!(
            completion_text(&response).as_deref(),
            Some("{\"questions\":[]}")
        );
    }

    #[test]
    fn completion_text_rejects_missing_or_blank_content() {
        assert!(completion_text(&json!({ "choices": [] })).is_none());
        assert!(completion_text(&json!({
            "choices": [{ "message": { "content": "  " } }]
        }))
        .is_none());
        assert!(completion_text(&json!({
            "choices": [{ "message": { "content": null } }]
        }))
        .is_none());
    }

    #[tokio::test]
    async fn mock_generator_returns_configured_text() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.contains("Fractions"))
            .times(1)
            .returning(|_| Ok("raw".to_string()));

        let text = generator.generate("Topic: Fractions").await.unwrap();
        assert_eq!(text, "raw");
    }
}
