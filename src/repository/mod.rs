//! Repository layer for database operations
//!
//! Each repository exposes pool-backed read queries plus connection-scoped
//! primitives; services run every check-then-write sequence on a single
//! transaction obtained from [`Repository::pool`].

pub mod device_ports;
pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod ip_addresses;
pub mod maintenance;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub employees: employees::EmployeesRepository,
    pub equipment: equipment::EquipmentRepository,
    pub device_ports: device_ports::DevicePortsRepository,
    pub ip_addresses: ip_addresses::IpAddressesRepository,
    pub maintenance: maintenance::MaintenanceRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment_types: equipment_types::EquipmentTypesRepository::new(pool.clone()),
            employees: employees::EmployeesRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            device_ports: device_ports::DevicePortsRepository::new(pool.clone()),
            ip_addresses: ip_addresses::IpAddressesRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            pool,
        }
    }
}
