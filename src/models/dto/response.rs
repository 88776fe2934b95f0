use serde::Serialize;

use crate::{
    constants::form_options::{FormChoice, SchoolLevel},
    models::domain::{QuestionSet, QuestionType},
};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuestionsResponse {
    pub result: QuestionSet,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsResponse {
    pub question_type: QuestionType,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelDto {
    pub code: &'static str,
    pub name: &'static str,
    pub classes: Vec<u8>,
}

impl From<&SchoolLevel> for LevelDto {
    fn from(level: &SchoolLevel) -> Self {
        LevelDto {
            code: level.code,
            name: level.name,
            classes: level.classes.clone().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceDto {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<&FormChoice> for ChoiceDto {
    fn from(choice: &FormChoice) -> Self {
        ChoiceDto {
            value: choice.value,
            label: choice.label,
        }
    }
}

/// Every select list the generation form offers.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptionsResponse {
    pub levels: Vec<LevelDto>,
    pub subjects: Vec<ChoiceDto>,
    pub difficulties: Vec<ChoiceDto>,
}
