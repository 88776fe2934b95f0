use actix_web::web;

pub mod health_handler;
pub mod question_handler;

pub use health_handler::health_check;
pub use question_handler::{generate_questions, get_form_options, get_tips, json_config};

/// Registers every endpoint on an `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(generate_questions)
        .service(get_tips)
        .service(get_form_options);
}
