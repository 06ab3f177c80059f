//! Business logic services

pub mod device_ports;
pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod ip_addresses;
pub mod maintenance;

use crate::{config::MaintenanceConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment_types: equipment_types::EquipmentTypesService,
    pub employees: employees::EmployeesService,
    pub equipment: equipment::EquipmentService,
    pub device_ports: device_ports::DevicePortsService,
    pub ip_addresses: ip_addresses::IpAddressesService,
    pub maintenance: maintenance::MaintenanceService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, maintenance_config: MaintenanceConfig) -> Self {
        Self {
            equipment_types: equipment_types::EquipmentTypesService::new(repository.clone()),
            employees: employees::EmployeesService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone(), maintenance_config),
            device_ports: device_ports::DevicePortsService::new(repository.clone()),
            ip_addresses: ip_addresses::IpAddressesService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository),
        }
    }
}
