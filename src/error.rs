//! Application error type and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::soil::engine::{ENGINE, ENGINE_VERSION};
use crate::soil::{DosingError, ValidationError};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dosing(#[from] DosingError),

    #[error("{0}")]
    BadRequest(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::Dosing(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Template(e) => {
                tracing::error!("Failed to render template: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": self.to_string(),
                "engine": ENGINE,
                "engine_version": ENGINE_VERSION,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::from(ValidationError::InvalidPlotArea).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = AppError::from(ValidationError::InvalidNutrient("nitrogen"));
        assert_eq!(err.to_string(), "invalid nitrogen value");
    }

    #[test]
    fn test_dosing_error_is_bad_request() {
        let err = AppError::from(DosingError::TotalCostOverflow);
        assert_eq!(err.to_string(), "total fertilizer cost is too large to represent");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
