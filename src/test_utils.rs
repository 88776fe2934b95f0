#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::{GenerationRequest, QuestionType};

    /// A filled-in form for a fourth-grade maths quiz.
    pub fn generation_request(question_type: QuestionType) -> GenerationRequest {
        GenerationRequest {
            question_type,
            level: "SD".to_string(),
            class: "4".to_string(),
            subject: "Mathematics".to_string(),
            difficulty: "Easy".to_string(),
            description: Some("Use everyday objects".to_string()),
            topic_prompt: "Fractions".to_string(),
        }
    }

    /// Model output holding `count` well-formed multiple choice questions.
    pub fn multiple_choice_response_json(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "question": format!("What is {i} + {i}?"),
                    "choices": [
                        (2 * i - 1).to_string(),
                        (2 * i).to_string(),
                        (2 * i + 1).to_string(),
                        (2 * i + 2).to_string()
                    ],
                    "answer": (2 * i).to_string(),
                    "explanation": format!("Adding {i} to itself doubles it"),
                })
            })
            .collect();

        json!({ "questions": questions }).to_string()
    }

    /// Model output holding `count` well-formed essay questions.
    pub fn essay_response_json(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "question": format!("Discuss case study {i}"),
                    "sampleAnswer": format!("Key points for case study {i}"),
                    "explanation": "Tests analytical writing",
                })
            })
            .collect();

        json!({ "questions": questions }).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionType;

    #[test]
    fn test_fixtures_generation_request() {
        let request = generation_request(QuestionType::Essay);
        assert_eq!(request.question_type, QuestionType::Essay);
        assert_eq!(request.topic_prompt, "Fractions");
    }

    #[test]
    fn test_fixtures_response_json_has_requested_count() {
        let value: serde_json::Value =
            serde_json::from_str(&multiple_choice_response_json(4)).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 4);
        assert_eq!(value["questions"][0]["answer"], "2");

        let value: serde_json::Value = serde_json::from_str(&essay_response_json(2)).unwrap();
        assert_eq!(value["questions"][1]["sampleAnswer"], "Key points for case study 2");
    }
}
