use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        generation_client::{OpenAiTextGenerator, TextGenerator},
        question_service::QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate_for_production()?;

        let generator = Arc::new(OpenAiTextGenerator::new(
            &config.llm_api_base,
            &config.llm_api_key,
            config.generation.clone(),
        ));

        Ok(Self::with_generator(config, generator))
    }

    /// Builds state around any generator, e.g. a stub in tests.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(generator)),
            config: Arc::new(config),
        }
    }
}
