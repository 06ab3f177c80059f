//! Shared domain enums
//!
//! Status, port and maintenance classifications are stored as their wire
//! strings in the database; these enums give the canonical value sets and
//! back the membership checks in the request validators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    Active,
    Inactive,
    Maintenance,
    Retired,
}

impl EquipmentStatus {
    pub const ALL: [&'static str; 4] = ["Active", "Inactive", "Maintenance", "Retired"];
}

impl FromStr for EquipmentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EquipmentStatus::Active),
            "Inactive" => Ok(EquipmentStatus::Inactive),
            "Maintenance" => Ok(EquipmentStatus::Maintenance),
            "Retired" => Ok(EquipmentStatus::Retired),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Inactive => "Inactive",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Retired => "Retired",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// PortType
// ---------------------------------------------------------------------------

/// Physical port connector type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PortType {
    Rj45,
    Sfp,
    SfpPlus,
    Qsfp,
    QsfpPlus,
    Qsfp28,
    Console,
    Usb,
}

impl PortType {
    pub const ALL: [&'static str; 8] = [
        "RJ45", "SFP", "SFP+", "QSFP", "QSFP+", "QSFP28", "Console", "USB",
    ];
}

impl FromStr for PortType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RJ45" => Ok(PortType::Rj45),
            "SFP" => Ok(PortType::Sfp),
            "SFP+" => Ok(PortType::SfpPlus),
            "QSFP" => Ok(PortType::Qsfp),
            "QSFP+" => Ok(PortType::QsfpPlus),
            "QSFP28" => Ok(PortType::Qsfp28),
            "Console" => Ok(PortType::Console),
            "USB" => Ok(PortType::Usb),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortType::Rj45 => "RJ45",
            PortType::Sfp => "SFP",
            PortType::SfpPlus => "SFP+",
            PortType::Qsfp => "QSFP",
            PortType::QsfpPlus => "QSFP+",
            PortType::Qsfp28 => "QSFP28",
            PortType::Console => "Console",
            PortType::Usb => "USB",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// PortStatus
// ---------------------------------------------------------------------------

/// Operational status of a device port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PortStatus {
    Active,
    Disabled,
    Error,
    Testing,
}

impl PortStatus {
    pub const ALL: [&'static str; 4] = ["Active", "Disabled", "Error", "Testing"];
}

impl FromStr for PortStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(PortStatus::Active),
            "Disabled" => Ok(PortStatus::Disabled),
            "Error" => Ok(PortStatus::Error),
            "Testing" => Ok(PortStatus::Testing),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortStatus::Active => "Active",
            PortStatus::Disabled => "Disabled",
            PortStatus::Error => "Error",
            PortStatus::Testing => "Testing",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// PortSpeed
// ---------------------------------------------------------------------------

/// Port bandwidth tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PortSpeed {
    Mbps10,
    Mbps100,
    Gbps1,
    Gbps10,
    Gbps25,
    Gbps40,
    Gbps100,
}

impl PortSpeed {
    pub const ALL: [&'static str; 7] = [
        "10Mbps", "100Mbps", "1Gbps", "10Gbps", "25Gbps", "40Gbps", "100Gbps",
    ];
}

impl FromStr for PortSpeed {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10Mbps" => Ok(PortSpeed::Mbps10),
            "100Mbps" => Ok(PortSpeed::Mbps100),
            "1Gbps" => Ok(PortSpeed::Gbps1),
            "10Gbps" => Ok(PortSpeed::Gbps10),
            "25Gbps" => Ok(PortSpeed::Gbps25),
            "40Gbps" => Ok(PortSpeed::Gbps40),
            "100Gbps" => Ok(PortSpeed::Gbps100),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PortSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortSpeed::Mbps10 => "10Mbps",
            PortSpeed::Mbps100 => "100Mbps",
            PortSpeed::Gbps1 => "1Gbps",
            PortSpeed::Gbps10 => "10Gbps",
            PortSpeed::Gbps25 => "25Gbps",
            PortSpeed::Gbps40 => "40Gbps",
            PortSpeed::Gbps100 => "100Gbps",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Maintenance record classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceType {
    Routine,
    Repair,
    Upgrade,
    Emergency,
    Preventive,
}

impl MaintenanceType {
    pub const ALL: [&'static str; 5] = ["Routine", "Repair", "Upgrade", "Emergency", "Preventive"];
}

impl FromStr for MaintenanceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Routine" => Ok(MaintenanceType::Routine),
            "Repair" => Ok(MaintenanceType::Repair),
            "Upgrade" => Ok(MaintenanceType::Upgrade),
            "Emergency" => Ok(MaintenanceType::Emergency),
            "Preventive" => Ok(MaintenanceType::Preventive),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceType::Routine => "Routine",
            MaintenanceType::Repair => "Repair",
            MaintenanceType::Upgrade => "Upgrade",
            MaintenanceType::Emergency => "Emergency",
            MaintenanceType::Preventive => "Preventive",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_status_round_trips() {
        for s in EquipmentStatus::ALL {
            let parsed: EquipmentStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("active".parse::<EquipmentStatus>().is_err());
    }

    #[test]
    fn port_type_round_trips() {
        for s in PortType::ALL {
            let parsed: PortType = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("SFP28".parse::<PortType>().is_err());
    }

    #[test]
    fn port_speed_round_trips() {
        for s in PortSpeed::ALL {
            let parsed: PortSpeed = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("1000Mbps".parse::<PortSpeed>().is_err());
    }

    #[test]
    fn maintenance_type_rejects_unknown() {
        assert!("Routine".parse::<MaintenanceType>().is_ok());
        assert!("Scheduled".parse::<MaintenanceType>().is_err());
    }
}
