//! API handlers for the netinv REST endpoints

pub mod device_ports;
pub mod employees;
pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod ip_addresses;
pub mod maintenance;
pub mod openapi;
