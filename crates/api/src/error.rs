use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quiz_core::model::SentenceError;
use services::{QuizError, StatsError};
use thiserror::Error;

use crate::dto::ErrorBody;

/// Failure at the HTTP boundary, carrying the status it maps to.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The requested sentence does not exist.
    #[error("invalid sentence: {0}")]
    InvalidSentence(#[from] SentenceError),

    /// Malformed path, body, or field value.
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    /// Persistence failed; details are logged, not returned.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSentence(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { status, .. } => *status,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Sentence(e) => ApiError::InvalidSentence(e),
            QuizError::User(e) => ApiError::Validation {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: e.to_string(),
            },
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Storage(cause) => {
                tracing::error!(error = %cause, "request failed in storage");
                "internal server error".to_owned()
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other, "rejected request");
                other.to_string()
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
