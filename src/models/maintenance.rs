//! Maintenance history models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{validate_cost, validate_maintenance_type};

/// Maintenance record view with equipment and performer names resolved
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceView {
    pub id: i64,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub maintenance_type: String,
    pub description: Option<String>,
    pub performed_by_id: Option<i64>,
    pub performed_by_name: Option<String>,
    #[schema(value_type = String)]
    pub cost: Option<Decimal>,
    pub next_maintenance_date: Option<NaiveDate>,
}

/// Create maintenance record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    pub equipment_id: i64,

    /// Defaults to the current instant when omitted
    pub date: Option<DateTime<Utc>>,

    #[serde(rename = "type")]
    #[validate(
        length(min = 1, max = 50, message = "type must be 1-50 characters"),
        custom(function = validate_maintenance_type)
    )]
    pub maintenance_type: String,

    #[validate(length(max = 1000, message = "description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub performed_by_id: Option<i64>,

    #[validate(custom(function = validate_cost))]
    #[schema(value_type = String)]
    pub cost: Option<Decimal>,

    pub next_maintenance_date: Option<NaiveDate>,
}

/// Update maintenance record request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenance {
    pub equipment_id: i64,

    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    #[validate(
        length(min = 1, max = 50, message = "type must be 1-50 characters"),
        custom(function = validate_maintenance_type)
    )]
    pub maintenance_type: String,

    #[validate(length(max = 1000, message = "description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub performed_by_id: Option<i64>,

    #[validate(custom(function = validate_cost))]
    #[schema(value_type = String)]
    pub cost: Option<Decimal>,

    pub next_maintenance_date: Option<NaiveDate>,
}
