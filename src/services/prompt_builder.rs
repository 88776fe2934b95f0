use crate::{
    constants::quiz_prompt::{
        ESSAY_REQUIREMENTS, ESSAY_SHAPE, MULTIPLE_CHOICE_REQUIREMENTS, MULTIPLE_CHOICE_SHAPE,
        QUESTION_COUNT, RESPONSE_FORMAT_FOOTER, SHARED_REQUIREMENTS,
    },
    models::domain::{GenerationRequest, QuestionType},
};

/// Renders a generation request into the instruction sent to the model.
///
/// Every field is embedded verbatim; empty fields stay empty. The output is
/// fully determined by the request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let (requirements, shape) = match request.question_type {
        QuestionType::MultipleChoice => (MULTIPLE_CHOICE_REQUIREMENTS, MULTIPLE_CHOICE_SHAPE),
        QuestionType::Essay => (ESSAY_REQUIREMENTS, ESSAY_SHAPE),
    };

    format!(
        "Generate {count} {label} questions.

Details:
- Subject: {subject}
- Level: {level}
- Class: {class}
- Difficulty: {difficulty}
- Description: {description}

Topic: {topic}

Requirements:
{requirements}
{shared}
{shape}

{footer}",
        count = QUESTION_COUNT,
        label = request.question_type.label(),
        subject = request.subject,
        level = request.level,
        class = request.class,
        difficulty = request.difficulty,
        description = request.description.as_deref().unwrap_or_default(),
        topic = request.topic_prompt,
        requirements = requirements,
        shared = SHARED_REQUIREMENTS,
        shape = shape,
        footer = RESPONSE_FORMAT_FOOTER,
    )
}
