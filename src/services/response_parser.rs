use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::models::domain::{
    EssayQuestion, MultipleChoiceQuestion, Question, QuestionSet, QuestionType,
};

/// Greedy span from the first `{` to the last `}`.
static JSON_SPAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON_SPAN_REGEX is a valid regex pattern"));

/// Reasons a model response could not be turned into a question set.
/// Question positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no valid JSON found")]
    NoJsonFound,

    #[error("missing questions array")]
    MissingQuestionsArray,

    #[error("missing required fields in question {0}")]
    MissingRequiredFields(usize),

    #[error("missing multiple choice fields in question {0}")]
    MissingChoiceFields(usize),

    #[error("missing sample answer in question {0}")]
    MissingSampleAnswer(usize),
}

/// Recovers and validates a question set from raw model output.
pub fn parse_response(raw: &str, question_type: QuestionType) -> Result<QuestionSet, ParseError> {
    let value = extract_json(raw)?;
    validate_questions(&value, question_type)
}

/// Finds a JSON document in `raw`, tolerating surrounding prose and fences.
pub fn extract_json(raw: &str) -> Result<Value, ParseError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }

    let span = JSON_SPAN_REGEX.find(raw).ok_or(ParseError::NoJsonFound)?;
    if let Ok(value) = serde_json::from_str::<Value>(span.as_str()) {
        return Ok(value);
    }

    // The greedy span breaks when prose between two objects contains braces.
    balanced_objects(raw)
        .into_iter()
        .find_map(|candidate| serde_json::from_str::<Value>(candidate).ok())
        .ok_or(ParseError::NoJsonFound)
}

/// Checks the recovered document against the question schema and
/// normalizes every question into its variant.
pub fn validate_questions(
    value: &Value,
    question_type: QuestionType,
) -> Result<QuestionSet, ParseError> {
    let items = value
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingQuestionsArray)?;

    let questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_question(item, index + 1, question_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions))
}

fn validate_question(
    item: &Value,
    position: usize,
    question_type: QuestionType,
) -> Result<Question, ParseError> {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    let (question, explanation) = match (
        text_field(fields, "question"),
        text_field(fields, "explanation"),
    ) {
        (Some(question), Some(explanation)) => (question, explanation),
        _ => return Err(ParseError::MissingRequiredFields(position)),
    };

    match question_type {
        QuestionType::MultipleChoice => {
            let (mut choices, answer) =
                match (choices_field(fields), text_field(fields, "answer")) {
                    (Some(choices), Some(answer)) => (choices, answer),
                    _ => return Err(ParseError::MissingChoiceFields(position)),
                };

            if !choices.contains(&answer) {
                choices.push(answer.clone());
            }

            Ok(Question::MultipleChoice(MultipleChoiceQuestion {
                question,
                choices,
                answer,
                explanation,
            }))
        }
        QuestionType::Essay => {
            let sample_answer = text_field(fields, "sampleAnswer")
                .ok_or(ParseError::MissingSampleAnswer(position))?;

            Ok(Question::Essay(EssayQuestion {
                question,
                sample_answer,
                explanation,
            }))
        }
    }
}

/// Strings are kept as-is and numbers use their JSON text. Empty strings,
/// zero, null, booleans and containers count as absent.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if !is_zero(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A list is taken element-wise; any other present value is wrapped into a
/// one-element list. Falsy scalars count as absent.
fn choices_field(fields: &Map<String, Value>) -> Option<Vec<String>> {
    match fields.get("choices")? {
        Value::Array(items) => Some(items.iter().map(choice_text).collect()),
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if is_zero(n) => None,
        other => Some(vec![choice_text(other)]),
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64() == Some(0.0)
}

fn choice_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Collects every top-level `{ ... }` slice whose braces balance, skipping
/// braces inside string literals. A `{` that never closes is skipped and the
/// scan resumes at the next one.
fn balanced_objects(raw: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(found) = raw[from..].find('{') {
        let start = from + found;
        match matching_brace(raw, start) {
            Some(end) => {
                spans.push(&raw[start..=end]);
                from = end + 1;
            }
            None => from = start + 1,
        }
    }

    spans
}

/// Byte offset of the `}` closing the `{` at `start`.
fn matching_brace(raw: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
