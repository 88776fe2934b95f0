pub mod generation_client;
pub mod prompt_builder;
pub mod question_service;
pub mod response_parser;
