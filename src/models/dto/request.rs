use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{GenerationRequest, QuestionType};

/// Body of `POST /api/generate`. Only `prompt` and `isMultipleChoice` are
/// required; the form selections default to empty strings.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub prompt: String,

    pub is_multiple_choice: bool,

    #[serde(default)]
    pub selected_level: String,

    #[serde(default)]
    pub selected_class: String,

    #[serde(default)]
    pub selected_subject: String,

    #[serde(default)]
    pub selected_difficulty: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<GenerateQuestionsRequest> for GenerationRequest {
    fn from(dto: GenerateQuestionsRequest) -> Self {
        GenerationRequest {
            question_type: QuestionType::from_multiple_choice_flag(dto.is_multiple_choice),
            level: dto.selected_level,
            class: dto.selected_class,
            subject: dto.selected_subject,
            difficulty: dto.selected_difficulty,
            description: dto.description,
            topic_prompt: dto.prompt,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsQuery {
    #[serde(default = "default_multiple_choice")]
    pub is_multiple_choice: bool,
}

fn default_multiple_choice() -> bool {
    true
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Topic prompt must not be empty".into());
        return Err(err);
    }
    Ok(())
}
