//! Error types for the netinv server

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Discriminator for [`AppError`], used by the status dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Duplicate,
    InUse,
    PrimaryIpConflict,
    InvalidConnection,
    Validation,
    BadRequest,
    Internal,
}

/// Map an error kind to its HTTP status code
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Duplicate => StatusCode::CONFLICT,
        ErrorKind::InUse => StatusCode::CONFLICT,
        ErrorKind::PrimaryIpConflict => StatusCode::CONFLICT,
        ErrorKind::InvalidConnection => StatusCode::BAD_REQUEST,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Duplicate(String),

    #[error("In use: {0}")]
    InUse(String),

    #[error("Primary IP conflict: {0}")]
    PrimaryIpConflict(String),

    #[error("Invalid port connection: {0}")]
    InvalidConnection(String),

    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Duplicate(_) => ErrorKind::Duplicate,
            AppError::InUse(_) => ErrorKind::InUse,
            AppError::PrimaryIpConflict(_) => ErrorKind::PrimaryIpConflict,
            AppError::InvalidConnection(_) => ErrorKind::InvalidConnection,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Error response body, uniform across all endpoints
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response body for field-level validation failures
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub status: u16,
    pub message: String,
    pub errors: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

/// Wire field name for a struct field; the API speaks camelCase
fn camel_case(field: &str) -> String {
    let mut parts = field.split('_');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Flatten `validator` output into one message per field
fn field_errors(errors: &validator::ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            (camel_case(field), message)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind());
        let now = Utc::now();

        if let AppError::Validation(ref errors) = self {
            let body = Json(ValidationErrorResponse {
                status: status.as_u16(),
                message: "Validation failed".to_string(),
                errors: field_errors(errors),
                timestamp: now,
            });
            return (status, body).into_response();
        }

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message,
            timestamp: now,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_and_in_use_map_to_409() {
        assert_eq!(status_for(ErrorKind::Duplicate), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::InUse), StatusCode::CONFLICT);
    }

    #[test]
    fn primary_ip_conflict_maps_to_409() {
        assert_eq!(status_for(ErrorKind::PrimaryIpConflict), StatusCode::CONFLICT);
    }

    #[test]
    fn connection_violations_map_to_400() {
        assert_eq!(status_for(ErrorKind::InvalidConnection), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = AppError::Internal("pool exhausted".to_string());
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(status_for(err.kind()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_field_names_use_wire_casing() {
        assert_eq!(camel_case("mac_address"), "macAddress");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("next_maintenance_date"), "nextMaintenanceDate");
    }

    #[test]
    fn error_kind_discriminates_variants() {
        assert_eq!(AppError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(AppError::Duplicate("x".into()).kind(), ErrorKind::Duplicate);
        assert_eq!(
            AppError::PrimaryIpConflict("x".into()).kind(),
            ErrorKind::PrimaryIpConflict
        );
        assert_eq!(
            AppError::InvalidConnection("x".into()).kind(),
            ErrorKind::InvalidConnection
        );
    }
}
