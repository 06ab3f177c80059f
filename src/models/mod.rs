//! Data models for the netinv server

pub mod device_port;
pub mod employee;
pub mod enums;
pub mod equipment;
pub mod equipment_type;
pub mod ip_address;
pub mod maintenance;

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use enums::{EquipmentStatus, MaintenanceType, PortSpeed, PortStatus, PortType};

// Re-export commonly used types
pub use device_port::{CreateDevicePort, DevicePort, DevicePortView, UpdateDevicePort};
pub use employee::{CreateEmployee, Employee, UpdateEmployee};
pub use equipment::{CreateEquipment, EquipmentSummary, EquipmentView, UpdateEquipment};
pub use equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType};
pub use ip_address::{CreateIpAddress, IpAddress, IpAddressView, UpdateIpAddress};
pub use maintenance::{CreateMaintenance, MaintenanceView, UpdateMaintenance};

/// MAC address format, e.g. `00:1A:2B:3C:4D:5E`
pub static MAC_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").unwrap());

/// IPv4 dotted-quad or full IPv6 address
pub static IP_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$|^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$",
    )
    .unwrap()
});

fn membership_error(code: &'static str, allowed: &[&str]) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(format!("must be one of: {}", allowed.join(", ")).into());
    err
}

pub fn validate_equipment_status(value: &str) -> Result<(), ValidationError> {
    EquipmentStatus::from_str(value)
        .map(|_| ())
        .map_err(|_| membership_error("equipment_status", &EquipmentStatus::ALL))
}

pub fn validate_port_type(value: &str) -> Result<(), ValidationError> {
    PortType::from_str(value)
        .map(|_| ())
        .map_err(|_| membership_error("port_type", &PortType::ALL))
}

pub fn validate_port_status(value: &str) -> Result<(), ValidationError> {
    PortStatus::from_str(value)
        .map(|_| ())
        .map_err(|_| membership_error("port_status", &PortStatus::ALL))
}

pub fn validate_port_speed(value: &str) -> Result<(), ValidationError> {
    PortSpeed::from_str(value)
        .map(|_| ())
        .map_err(|_| membership_error("port_speed", &PortSpeed::ALL))
}

pub fn validate_maintenance_type(value: &str) -> Result<(), ValidationError> {
    MaintenanceType::from_str(value)
        .map(|_| ())
        .map_err(|_| membership_error("maintenance_type", &MaintenanceType::ALL))
}

pub fn validate_cost(value: &rust_decimal::Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut err = ValidationError::new("cost");
        err.message = Some("cost must not be negative".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_regex_accepts_colon_and_dash_separators() {
        assert!(MAC_ADDRESS_RE.is_match("00:1A:2B:3C:4D:5E"));
        assert!(MAC_ADDRESS_RE.is_match("00-1a-2b-3c-4d-5e"));
        assert!(!MAC_ADDRESS_RE.is_match("001A2B3C4D5E"));
        assert!(!MAC_ADDRESS_RE.is_match("00:1A:2B:3C:4D"));
    }

    #[test]
    fn ip_regex_accepts_v4_and_v6() {
        assert!(IP_ADDRESS_RE.is_match("192.168.1.10"));
        assert!(IP_ADDRESS_RE.is_match("10.0.0.255"));
        assert!(IP_ADDRESS_RE.is_match("fe80:0000:0000:0000:0202:b3ff:fe1e:8329"));
        assert!(!IP_ADDRESS_RE.is_match("256.1.1.1"));
        assert!(!IP_ADDRESS_RE.is_match("192.168.1"));
    }

    #[test]
    fn membership_validators_report_allowed_values() {
        assert!(validate_equipment_status("Active").is_ok());
        let err = validate_equipment_status("Broken").unwrap_err();
        assert!(err.message.unwrap().contains("Retired"));

        assert!(validate_port_type("SFP+").is_ok());
        assert!(validate_port_type("SFP++").is_err());
    }

    #[test]
    fn cost_validator_rejects_negative() {
        use rust_decimal::Decimal;
        assert!(validate_cost(&Decimal::new(1500, 2)).is_ok());
        assert!(validate_cost(&Decimal::new(-1, 0)).is_err());
    }
}
