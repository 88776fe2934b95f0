use serde::{Deserialize, Serialize};

/// Which kind of questions a request asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Essay,
}

impl QuestionType {
    pub fn from_multiple_choice_flag(is_multiple_choice: bool) -> Self {
        if is_multiple_choice {
            QuestionType::MultipleChoice
        } else {
            QuestionType::Essay
        }
    }

    /// Human wording used inside prompts.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple choice",
            QuestionType::Essay => "essay",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MultipleChoiceQuestion {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayQuestion {
    pub question: String,
    pub sample_answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice(MultipleChoiceQuestion),
    Essay(EssayQuestion),
}

/// Validated questions in presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Form parameters a prompt is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub question_type: QuestionType,
    pub level: String,
    pub class: String,
    pub subject: String,
    pub difficulty: String,
    pub description: Option<String>,
    pub topic_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_from_flag() {
        assert_eq!(
            QuestionType::from_multiple_choice_flag(true),
            QuestionType::MultipleChoice
        );
        assert_eq!(
            QuestionType::from_multiple_choice_flag(false),
            QuestionType::Essay
        );
        assert_eq!(QuestionType::Essay.label(), "essay");
    }

    #[test]
    fn multiple_choice_question_serializes_with_type_tag() {
        let question = Question::MultipleChoice(MultipleChoiceQuestion {
            question: "2+2?".to_string(),
            choices: vec!["3".to_string(), "4".to_string()],
            answer: "4".to_string(),
            explanation: "Basic arithmetic".to_string(),
        });

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "multiple_choice");
        assert_eq!(json["choices"][1], "4");
        assert_eq!(json["answer"], "4");
    }

    #[test]
    fn essay_question_uses_camel_case_sample_answer() {
        let question = Question::Essay(EssayQuestion {
            question: "Explain photosynthesis".to_string(),
            sample_answer: "Plants convert light to energy".to_string(),
            explanation: "Key biology concept".to_string(),
        });

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "essay");
        assert_eq!(json["sampleAnswer"], "Plants convert light to energy");
        assert!(json.get("sample_answer").is_none());
        assert_eq!(json["explanation"], "Key biology concept");
    }

    #[test]
    fn question_set_accessors() {
        let set = QuestionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
