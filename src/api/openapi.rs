//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    device_ports, employees, equipment, equipment_types, health, ip_addresses, maintenance,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Netinv API",
        version = "1.0.0",
        description = "Network equipment inventory and lifecycle tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment types
        equipment_types::list_types,
        equipment_types::get_type,
        equipment_types::create_type,
        equipment_types::update_type,
        equipment_types::delete_type,
        equipment_types::list_by_manufacturer,
        equipment_types::list_by_manufacturer_sorted,
        equipment_types::search,
        equipment_types::get_by_name,
        equipment_types::exists,
        // Employees
        employees::list_employees,
        employees::get_employee,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        employees::search_employees,
        employees::get_by_email,
        employees::list_by_position,
        employees::list_by_position_sorted,
        employees::exists_by_email,
        employees::count_employees,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::change_status,
        equipment::get_by_serial,
        equipment::get_by_mac,
        equipment::get_by_ip,
        equipment::list_by_type,
        equipment::list_by_employee,
        equipment::list_by_status,
        equipment::search_by_name,
        equipment::search_by_address,
        equipment::list_by_type_and_status,
        equipment::list_added_after,
        equipment::list_needing_maintenance,
        equipment::count_by_type,
        equipment::count_by_status,
        // Device ports
        device_ports::list_ports,
        device_ports::get_port,
        device_ports::create_port,
        device_ports::update_port,
        device_ports::delete_port,
        device_ports::list_by_equipment,
        device_ports::get_by_equipment_and_number,
        device_ports::list_by_status,
        device_ports::list_active,
        device_ports::list_available,
        device_ports::list_occupied,
        device_ports::list_connected_to,
        device_ports::list_by_port_type,
        device_ports::list_by_equipment_type_and_status,
        device_ports::connect,
        device_ports::disconnect,
        device_ports::change_status,
        device_ports::get_connected,
        device_ports::is_connected,
        device_ports::count_by_equipment,
        device_ports::count_active,
        // IP addresses
        ip_addresses::list_ip_addresses,
        ip_addresses::get_ip_address,
        ip_addresses::create_ip_address,
        ip_addresses::update_ip_address,
        ip_addresses::delete_ip_address,
        ip_addresses::list_by_equipment,
        ip_addresses::get_primary,
        ip_addresses::search_by_ip,
        ip_addresses::list_by_network_type,
        ip_addresses::list_by_equipment_and_network_type,
        ip_addresses::list_by_subnet_mask,
        ip_addresses::set_primary,
        ip_addresses::unset_primary,
        ip_addresses::exists,
        ip_addresses::count_by_equipment,
        // Maintenance history
        maintenance::list_records,
        maintenance::get_record,
        maintenance::create_record,
        maintenance::update_record,
        maintenance::delete_record,
        maintenance::list_by_equipment,
        maintenance::get_latest,
        maintenance::list_by_equipment_and_type,
        maintenance::list_by_employee,
        maintenance::list_by_date_range,
        maintenance::list_recent,
        maintenance::list_by_type,
        maintenance::list_overdue,
        maintenance::schedule_next,
        maintenance::count_by_equipment,
        maintenance::count_by_type,
    ),
    components(
        schemas(
            // Equipment types
            crate::models::equipment_type::EquipmentType,
            crate::models::equipment_type::CreateEquipmentType,
            crate::models::equipment_type::UpdateEquipmentType,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            crate::models::employee::UpdateEmployee,
            // Equipment
            crate::models::equipment::EquipmentView,
            crate::models::equipment::EquipmentSummary,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Device ports
            crate::models::device_port::DevicePort,
            crate::models::device_port::DevicePortView,
            crate::models::device_port::CreateDevicePort,
            crate::models::device_port::UpdateDevicePort,
            // IP addresses
            crate::models::ip_address::IpAddress,
            crate::models::ip_address::IpAddressView,
            crate::models::ip_address::CreateIpAddress,
            crate::models::ip_address::UpdateIpAddress,
            // Maintenance history
            crate::models::maintenance::MaintenanceView,
            crate::models::maintenance::CreateMaintenance,
            crate::models::maintenance::UpdateMaintenance,
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::PortType,
            crate::models::enums::PortStatus,
            crate::models::enums::PortSpeed,
            crate::models::enums::MaintenanceType,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment-types", description = "Equipment type management"),
        (name = "employees", description = "Employee management"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "device-ports", description = "Device port and connection management"),
        (name = "ip-addresses", description = "IP address assignments"),
        (name = "maintenance-history", description = "Maintenance history")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
