//! Equipment models
//!
//! Equipment is the central entity; read views carry denormalized type and
//! custodian fields plus per-read child counts, assembled by the repository.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{validate_equipment_status, IP_ADDRESS_RE, MAC_ADDRESS_RE};

/// Full equipment view with resolved relations and child counts
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentView {
    pub id: i64,
    pub type_id: i64,
    pub type_name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub employee_id: Option<i64>,
    pub employee_full_name: Option<String>,
    pub name: String,
    pub serial_number: Option<String>,
    pub mac_address: Option<String>,
    /// Display address; the authoritative assignments live in ip_address
    pub ip_address: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub date_added: NaiveDate,
    pub date_updated: Option<NaiveDate>,
    /// Opaque device-specific document, stored and returned as-is
    #[schema(value_type = Object)]
    pub technical_params: Option<serde_json::Value>,
    pub ports_count: i64,
    pub ip_addresses_count: i64,
    pub maintenance_count: i64,
}

/// Abbreviated equipment view for list responses
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummary {
    pub id: i64,
    pub name: String,
    pub type_name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub ip_address: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub date_added: NaiveDate,
    pub ports_count: i64,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub type_id: i64,

    /// Responsible custodian, optional
    pub employee_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "serial number must not exceed 100 characters"))]
    pub serial_number: Option<String>,

    #[validate(
        length(max = 50, message = "MAC address must not exceed 50 characters"),
        regex(path = *MAC_ADDRESS_RE, message = "invalid MAC address format (e.g. 00:1A:2B:3C:4D:5E)")
    )]
    pub mac_address: Option<String>,

    #[validate(
        length(max = 45, message = "IP address must not exceed 45 characters"),
        regex(path = *IP_ADDRESS_RE, message = "invalid IP address format (IPv4 or IPv6)")
    )]
    pub ip_address: Option<String>,

    #[validate(length(max = 250, message = "address must not exceed 250 characters"))]
    pub address: Option<String>,

    /// Defaults to "Active" when omitted
    #[validate(custom(function = validate_equipment_status))]
    pub status: Option<String>,

    /// Defaults to the current date when omitted
    pub date_added: Option<NaiveDate>,

    #[schema(value_type = Object)]
    pub technical_params: Option<serde_json::Value>,
}

/// Update equipment request (full update)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub type_id: i64,

    pub employee_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "serial number must not exceed 100 characters"))]
    pub serial_number: Option<String>,

    #[validate(
        length(max = 50, message = "MAC address must not exceed 50 characters"),
        regex(path = *MAC_ADDRESS_RE, message = "invalid MAC address format (e.g. 00:1A:2B:3C:4D:5E)")
    )]
    pub mac_address: Option<String>,

    #[validate(
        length(max = 45, message = "IP address must not exceed 45 characters"),
        regex(path = *IP_ADDRESS_RE, message = "invalid IP address format (IPv4 or IPv6)")
    )]
    pub ip_address: Option<String>,

    #[validate(length(max = 250, message = "address must not exceed 250 characters"))]
    pub address: Option<String>,

    #[validate(custom(function = validate_equipment_status))]
    pub status: Option<String>,

    pub date_added: Option<NaiveDate>,

    /// Defaults to the current date when omitted
    pub date_updated: Option<NaiveDate>,

    #[schema(value_type = Object)]
    pub technical_params: Option<serde_json::Value>,
}
