pub mod form_options;
pub mod quiz_prompt;
