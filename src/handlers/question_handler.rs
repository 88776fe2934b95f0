use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::form_options::{tips_for, DIFFICULTIES, SCHOOL_LEVELS, SUBJECTS},
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::{
        domain::{GenerationRequest, QuestionSet, QuestionType},
        dto::{
            request::{GenerateQuestionsRequest, TipsQuery},
            response::{
                ChoiceDto, FormOptionsResponse, GenerateQuestionsResponse, LevelDto, TipsResponse,
            },
        },
    },
};

#[post("/api/generate")]
pub async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> HttpResponse {
    match run_generation(&state, request.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(GenerateQuestionsResponse { result }),
        Err(err) => {
            log::warn!(
                "Question generation failed [{}]: {}",
                get_request_id(&req).unwrap_or_else(|| "-".to_string()),
                err
            );
            err.into_http_response(state.config.include_debug())
        }
    }
}

async fn run_generation(
    state: &AppState,
    request: GenerateQuestionsRequest,
) -> AppResult<QuestionSet> {
    request.validate()?;
    state
        .question_service
        .generate_questions(GenerationRequest::from(request))
        .await
}

#[get("/api/tips")]
pub async fn get_tips(query: web::Query<TipsQuery>) -> HttpResponse {
    let question_type = QuestionType::from_multiple_choice_flag(query.is_multiple_choice);
    HttpResponse::Ok().json(TipsResponse {
        question_type,
        tips: tips_for(question_type).to_vec(),
    })
}

#[get("/api/options")]
pub async fn get_form_options() -> HttpResponse {
    HttpResponse::Ok().json(FormOptionsResponse {
        levels: SCHOOL_LEVELS.iter().map(LevelDto::from).collect(),
        subjects: SUBJECTS.iter().map(ChoiceDto::from).collect(),
        difficulties: DIFFICULTIES.iter().map(ChoiceDto::from).collect(),
    })
}

/// Malformed JSON bodies get the same `{ error }` shape as other failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}
