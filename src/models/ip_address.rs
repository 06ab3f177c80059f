//! IP address models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::IP_ADDRESS_RE;

/// IP address assignment row as stored
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    pub id: i64,
    pub equipment_id: i64,
    /// Globally unique across all equipment
    pub ip_address: String,
    pub subnet_mask: Option<String>,
    pub gateway: Option<String>,
    pub network_type: Option<String>,
    /// At most one true per equipment
    pub is_primary: bool,
    pub assigned_date: NaiveDate,
}

/// IP address view with the owning equipment name resolved
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressView {
    pub id: i64,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub ip_address: String,
    pub subnet_mask: Option<String>,
    pub gateway: Option<String>,
    pub network_type: Option<String>,
    pub is_primary: bool,
    pub assigned_date: NaiveDate,
}

/// Create IP address request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIpAddress {
    pub equipment_id: i64,

    #[validate(
        length(min = 1, max = 45, message = "IP address must be 1-45 characters"),
        regex(path = *IP_ADDRESS_RE, message = "invalid IP address format (IPv4 or IPv6)")
    )]
    pub ip_address: String,

    #[validate(length(max = 45, message = "subnet mask must not exceed 45 characters"))]
    pub subnet_mask: Option<String>,

    #[validate(length(max = 45, message = "gateway must not exceed 45 characters"))]
    pub gateway: Option<String>,

    #[validate(length(max = 20, message = "network type must not exceed 20 characters"))]
    pub network_type: Option<String>,

    #[serde(default)]
    pub is_primary: bool,

    /// Defaults to the current date when omitted
    pub assigned_date: Option<NaiveDate>,
}

/// Update IP address request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIpAddress {
    pub equipment_id: i64,

    #[validate(
        length(min = 1, max = 45, message = "IP address must be 1-45 characters"),
        regex(path = *IP_ADDRESS_RE, message = "invalid IP address format (IPv4 or IPv6)")
    )]
    pub ip_address: String,

    #[validate(length(max = 45, message = "subnet mask must not exceed 45 characters"))]
    pub subnet_mask: Option<String>,

    #[validate(length(max = 45, message = "gateway must not exceed 45 characters"))]
    pub gateway: Option<String>,

    #[validate(length(max = 20, message = "network type must not exceed 20 characters"))]
    pub network_type: Option<String>,

    #[serde(default)]
    pub is_primary: bool,

    pub assigned_date: Option<NaiveDate>,
}
