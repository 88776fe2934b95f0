use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::response_parser::ParseError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    GenerationServiceError(String),

    #[error("{0}")]
    ParseError(#[from] ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::GenerationServiceError(_) => "GENERATION_SERVICE_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Builds the `{ error, debug? }` body. The debug block is only attached
    /// when the caller allows it (non-production deployments).
    pub fn to_error_response(&self, include_debug: bool) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            debug: include_debug.then(|| ErrorDebug {
                kind: self.error_code(),
                message: format!("{:?}", self),
            }),
        }
    }

    pub fn into_http_response(self, include_debug: bool) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response(include_debug))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<ErrorDebug>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDebug {
    pub kind: &'static str,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response(false))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::GenerationServiceError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
