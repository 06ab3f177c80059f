//! Employee model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Employee record (equipment custodians and maintenance performers)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub position: Option<String>,
    /// Unique when present
    pub email: Option<String>,
}

/// Create employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 100, message = "full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(length(max = 100, message = "position must not exceed 100 characters"))]
    pub position: Option<String>,

    #[validate(
        email(message = "invalid email"),
        length(max = 100, message = "email must not exceed 100 characters")
    )]
    pub email: Option<String>,
}

/// Update employee request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(length(min = 1, max = 100, message = "full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(length(max = 100, message = "position must not exceed 100 characters"))]
    pub position: Option<String>,

    #[validate(
        email(message = "invalid email"),
        length(max = 100, message = "email must not exceed 100 characters")
    )]
    pub email: Option<String>,
}
