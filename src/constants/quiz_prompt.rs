/// Number of questions every prompt asks for. Not enforced on the response.
pub const QUESTION_COUNT: usize = 10;

pub const MULTIPLE_CHOICE_REQUIREMENTS: &str = "- Each question should have 4 choices
- Include the correct answer";

pub const ESSAY_REQUIREMENTS: &str = "- Each question should be thought-provoking
- Questions should encourage critical thinking";

pub const SHARED_REQUIREMENTS: &str = "- Provide a detailed explanation or sample answer
- Format the response as JSON with this structure:";

pub const MULTIPLE_CHOICE_SHAPE: &str = r#"{
  "questions": [
    {
      "question": "Question text",
      "choices": ["Choice 1", "Choice 2", "Choice 3", "Choice 4"],
      "answer": "Correct choice",
      "explanation": "Explanation text"
    }
  ]
}"#;

pub const ESSAY_SHAPE: &str = r#"{
  "questions": [
    {
      "question": "Question text",
      "sampleAnswer": "Detailed sample answer or key points to include",
      "explanation": "Explanation text"
    }
  ]
}"#;

pub const RESPONSE_FORMAT_FOOTER: &str = "Response (JSON only):";
