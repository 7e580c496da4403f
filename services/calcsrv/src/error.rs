//! Error handling for CalcSrv
//!
//! Wraps the library error taxonomies into one service error that knows
//! how to render itself as an HTTP response. Domain failures and rejected
//! request bodies map to 400; everything else is a 500. The two dispatch
//! rejections keep their original wire strings (`Operación no válida`,
//! `Acción no válida`).

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calc_charts::ChartError;
use calc_engine::CalcError;
use serde_json::json;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

/// Service-level error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Calc(CalcError::UnknownOperation(_)) => {
                (StatusCode::BAD_REQUEST, "Operación no válida".to_string())
            }
            ApiError::Calc(CalcError::UnknownAction(_)) => {
                (StatusCode::BAD_REQUEST, "Acción no válida".to_string())
            }
            ApiError::Calc(_) | ApiError::Chart(_) | ApiError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_keeps_wire_string() {
        let error = ApiError::from(CalcError::unknown_operation("factorial"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_errors_are_bad_requests() {
        let error = ApiError::from(CalcError::DivisionByZero);
        assert_eq!(format!("{}", error), "Division by zero");
        assert_eq!(
            error.into_response().status(),
            StatusCode::BAD_REQUEST
        );

        let error = ApiError::from(ChartError::empty_input("histogram of an empty series"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_rejected_bodies_are_bad_requests() {
        let error = ApiError::InvalidRequest("datos: expected a sequence".to_string());
        assert_eq!(format!("{}", error), "datos: expected a sequence");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let error = ApiError::Internal("lock poisoned".to_string());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
