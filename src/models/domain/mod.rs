pub mod question;

pub use question::{
    EssayQuestion, GenerationRequest, MultipleChoiceQuestion, Question, QuestionSet, QuestionType,
};
