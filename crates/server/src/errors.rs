use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::FieldErrors;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Body of every 400 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid",
            Self::NotFound => "not_found",
            Self::Internal(_) => "error",
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if let Some(errors) = e.field_errors() {
            return Self::Validation(errors.clone());
        }
        match e {
            ServiceError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self { Self::Validation(errors) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                let body = ValidationProblem { title: "Validation Error".to_string(), status: StatusCode::BAD_REQUEST.as_u16(), errors };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn maps_service_errors_to_api_errors() {
        let e: ApiError = ServiceError::not_found("region").into();
        assert!(matches!(e, ApiError::NotFound));

        let e: ApiError = ServiceError::Model(ModelError::Validation(FieldErrors::single("code", "code is required"))).into();
        assert!(matches!(e, ApiError::Validation(ref errors) if errors.contains("code")));

        let e: ApiError = ServiceError::Db("connection reset".into()).into();
        assert_eq!(e.outcome(), "error");
    }

    #[test]
    fn not_found_has_empty_body() {
        let res = ApiError::NotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
