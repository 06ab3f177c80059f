//! Equipment type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment type record (switch/router/firewall model families)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentType {
    pub id: i64,
    /// Unique type name, e.g. "Catalyst 2960"
    pub type_name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    /// Ports a device of this type ships with
    pub default_port_count: Option<i32>,
    pub connection_type: Option<String>,
    pub osi_level: Option<String>,
    pub description: Option<String>,
}

/// Create equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentType {
    #[validate(length(min = 1, max = 50, message = "type name must be 1-50 characters"))]
    pub type_name: String,

    #[validate(length(max = 100, message = "manufacturer must not exceed 100 characters"))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 100, message = "model must not exceed 100 characters"))]
    pub model: Option<String>,

    #[validate(range(min = 0, max = 256, message = "default port count must be 0-256"))]
    pub default_port_count: Option<i32>,

    #[validate(length(max = 50, message = "connection type must not exceed 50 characters"))]
    pub connection_type: Option<String>,

    #[validate(length(max = 20, message = "OSI level must not exceed 20 characters"))]
    pub osi_level: Option<String>,

    pub description: Option<String>,
}

/// Update equipment type request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentType {
    #[validate(length(min = 1, max = 50, message = "type name must be 1-50 characters"))]
    pub type_name: String,

    #[validate(length(max = 100, message = "manufacturer must not exceed 100 characters"))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 100, message = "model must not exceed 100 characters"))]
    pub model: Option<String>,

    #[validate(range(min = 0, max = 256, message = "default port count must be 0-256"))]
    pub default_port_count: Option<i32>,

    #[validate(length(max = 50, message = "connection type must not exceed 50 characters"))]
    pub connection_type: Option<String>,

    #[validate(length(max = 20, message = "OSI level must not exceed 20 characters"))]
    pub osi_level: Option<String>,

    pub description: Option<String>,
}
