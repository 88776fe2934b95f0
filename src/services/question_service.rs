use std::sync::Arc;

use crate::{
    constants::quiz_prompt::QUESTION_COUNT,
    errors::AppResult,
    models::domain::{GenerationRequest, QuestionSet},
    services::{
        generation_client::TextGenerator, prompt_builder::build_prompt,
        response_parser::parse_response,
    },
};

pub struct QuestionService {
    generator: Arc<dyn TextGenerator>,
}

impl QuestionService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Builds the prompt, makes exactly one generation call and parses the
    /// completion. Failures are terminal; nothing is retried.
    pub async fn generate_questions(&self, request: GenerationRequest) -> AppResult<QuestionSet> {
        log::info!(
            "Generating {} questions (subject: {:?}, level: {:?}, class: {:?})",
            request.question_type.label(),
            request.subject,
            request.level,
            request.class
        );

        let prompt = build_prompt(&request);
        let raw = self.generator.generate(&prompt).await.map_err(|e| {
            log::error!("Generation call failed: {}", e);
            e
        })?;

        let question_set = parse_response(&raw, request.question_type).map_err(|e| {
            log::error!("Failed to parse model response ({}). Raw response: {}", e, raw);
            e
        })?;

        if question_set.len() != QUESTION_COUNT {
            log::warn!(
                "Model returned {} questions, expected {}",
                question_set.len(),
                QUESTION_COUNT
            );
        }

        Ok(question_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        models::domain::{Question, QuestionType},
        services::{generation_client::MockTextGenerator, response_parser::ParseError},
        test_utils::fixtures::{essay_response_json, generation_request, multiple_choice_response_json},
    };

    fn service_returning(result: AppResult<String>) -> QuestionService {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .return_once(move |_| result);
        QuestionService::new(Arc::new(generator))
    }

    #[tokio::test]
    async fn generates_multiple_choice_questions() {
        let service = service_returning(Ok(multiple_choice_response_json(10)));

        let set = service
            .generate_questions(generation_request(QuestionType::MultipleChoice))
            .await
            .unwrap();

        assert_eq!(set.len(), 10);
        assert!(matches!(set.questions[0], Question::MultipleChoice(_)));
    }

    #[tokio::test]
    async fn sends_the_built_prompt() {
        let request = generation_request(QuestionType::Essay);
        let expected_prompt = build_prompt(&request);

        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(move |prompt| *prompt == expected_prompt)
            .times(1)
            .returning(|_| Ok(essay_response_json(2)));
        let service = QuestionService::new(Arc::new(generator));

        let set = service.generate_questions(request).await.unwrap();
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn generation_errors_propagate_verbatim() {
        let service = service_returning(Err(AppError::GenerationServiceError(
            "quota exceeded".to_string(),
        )));

        let err = service
            .generate_questions(generation_request(QuestionType::Essay))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[tokio::test]
    async fn unparseable_completion_is_a_parse_error() {
        let service = service_returning(Ok("I cannot help with that.".to_string()));

        let err = service
            .generate_questions(generation_request(QuestionType::MultipleChoice))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ParseError(ParseError::NoJsonFound)));
    }
}
