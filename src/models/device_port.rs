//! Device port models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{validate_port_speed, validate_port_status, validate_port_type};

/// Device port row as stored
///
/// A port is either unconnected (both target columns NULL) or connected
/// (target equipment and target port set together by the connect path).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevicePort {
    pub id: i64,
    pub equipment_id: i64,
    pub port_number: i32,
    pub port_type: Option<String>,
    pub status: Option<String>,
    pub speed: Option<String>,
    pub connected_to_equipment_id: Option<i64>,
    pub connected_to_port_id: Option<i64>,
    pub description: Option<String>,
}

impl DevicePort {
    /// A port counts as connected only through its own target-port column
    pub fn is_connected(&self) -> bool {
        self.connected_to_port_id.is_some()
    }
}

/// Device port view with resolved owner and connection target names
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevicePortView {
    pub id: i64,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub port_number: i32,
    pub port_type: Option<String>,
    pub status: Option<String>,
    pub speed: Option<String>,
    pub connected_to_equipment_id: Option<i64>,
    pub connected_to_equipment_name: Option<String>,
    pub connected_to_port_id: Option<i64>,
    pub connected_to_port_number: Option<i32>,
    pub description: Option<String>,
}

/// Create device port request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDevicePort {
    pub equipment_id: i64,

    #[validate(range(min = 1, max = 256, message = "port number must be 1-256"))]
    pub port_number: i32,

    #[validate(custom(function = validate_port_type))]
    pub port_type: Option<String>,

    #[validate(custom(function = validate_port_status))]
    pub status: Option<String>,

    #[validate(custom(function = validate_port_speed))]
    pub speed: Option<String>,

    pub connected_to_equipment_id: Option<i64>,
    pub connected_to_port_id: Option<i64>,

    #[validate(length(max = 200, message = "description must not exceed 200 characters"))]
    pub description: Option<String>,
}

/// Update device port request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevicePort {
    pub equipment_id: i64,

    #[validate(range(min = 1, max = 256, message = "port number must be 1-256"))]
    pub port_number: i32,

    #[validate(custom(function = validate_port_type))]
    pub port_type: Option<String>,

    #[validate(custom(function = validate_port_status))]
    pub status: Option<String>,

    #[validate(custom(function = validate_port_speed))]
    pub speed: Option<String>,

    pub connected_to_equipment_id: Option<i64>,
    pub connected_to_port_id: Option<i64>,

    #[validate(length(max = 200, message = "description must not exceed 200 characters"))]
    pub description: Option<String>,
}
