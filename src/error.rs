//! Application error type and its HTTP rendering.
//!
//! Every layer returns [`AppError`]. The HTTP boundary turns it into a JSON
//! body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Owner 99 not found", "details": { "id": 99 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },

    /// Failure reported by the database, passed through untouched.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
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

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Lookup miss for an entity, with the message `"{entity} {id} not found"`.
    pub fn entity_not_found<T: Display + Serialize>(entity: &str, id: T) -> Self {
        Self::not_found(format!("{entity} {id} not found"), json!({ "id": id }))
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            AppError::Database(e) if is_unique_violation(e) => (StatusCode::CONFLICT, "conflict"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    /// Builds the JSON error payload for this error.
    ///
    /// Database failures are reported without driver details.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
            AppError::Database(e) => match e.as_database_error() {
                Some(db) if db.is_unique_violation() => (
                    "Unique constraint violation".to_string(),
                    json!({ "constraint": db.constraint() }),
                ),
                _ => ("Database error".to_string(), json!({})),
            },
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Database(e) = &self {
            tracing::error!(error = %e, "Database failure");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_not_found_message() {
        let err = AppError::entity_not_found("Owner", 99);

        assert_eq!(err.to_string(), "Owner 99 not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("dup", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_info_hides_driver_details() {
        let info = AppError::from(sqlx::Error::PoolTimedOut).to_error_info();

        assert_eq!(info.code, "database_error");
        assert_eq!(info.message, "Database error");
    }

    #[test]
    fn test_error_info_carries_details() {
        let info = AppError::entity_not_found("Pet", 7).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Pet 7 not found");
        assert_eq!(info.details, json!({ "id": 7 }));
    }
}
