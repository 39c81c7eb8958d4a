use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::entities::AssessmentError;
use shared::dto::ErrorResponse;

pub mod export;
pub mod health;
pub mod risks;

#[derive(Debug)]
pub enum ServiceError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    InternalError(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            ServiceError::Unprocessable(e) => (StatusCode::UNPROCESSABLE_ENTITY, e),
            ServiceError::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

impl From<AssessmentError> for ServiceError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::RatingOutOfRange { .. } | AssessmentError::NotAnInteger(_) => {
                ServiceError::BadRequest(err.to_string())
            }
            AssessmentError::EmptyField(_) => ServiceError::Unprocessable(err.to_string()),
        }
    }
}
