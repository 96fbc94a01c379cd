use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn film_not_found(id: i64) -> Self {
        Self::not_found(format!("Film with id = {id} not found"), json!({ "id": id }))
    }

    pub fn user_not_found(id: i64) -> Self {
        Self::not_found(format!("User with id = {id} not found"), json!({ "id": id }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = first_message(&errors).unwrap_or_else(|| "Validation failed".to_string());
        tracing::warn!(%message, "Rejected request payload");

        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request(message, details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "Malformed JSON body");
        AppError::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "Malformed query string");
        AppError::bad_request(
            "Malformed query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "Malformed path parameter");
        AppError::bad_request(
            "Malformed path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// Picks the first human-readable message out of a (possibly nested) error tree.
fn first_message(errors: &ValidationErrors) -> Option<String> {
    use validator::ValidationErrorsKind;

    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(err) = list.first() {
                    return Some(
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for '{field}'")),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(message) = first_message(inner) {
                    return Some(message);
                }
            }
            ValidationErrorsKind::List(items) => {
                if let Some(message) = items.values().find_map(|inner| first_message(inner)) {
                    return Some(message);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::bad_request("Name must not be blank", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::film_not_found(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_display_contains_id() {
        let err = AppError::user_not_found(42);
        assert_eq!(err.to_string(), "User with id = 42 not found");
    }

    #[test]
    fn test_validation_errors_conversion_uses_field_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "duration",
            ValidationError::new("range").with_message("Duration must be positive".into()),
        );

        let err: AppError = errors.into();
        match err {
            AppError::Validation { message, .. } => {
                assert_eq!(message, "Duration must be positive")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors_conversion_without_message() {
        let mut errors = ValidationErrors::new();
        errors.add("login", ValidationError::new("regex"));

        let err: AppError = errors.into();
        assert_eq!(err.to_string(), "Invalid value for 'login'");
    }
}
