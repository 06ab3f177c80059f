//! Netinv Server - Network Equipment Inventory
//!
//! A Rust REST API server for network equipment lifecycle tracking.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use netinv_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("netinv_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Netinv Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.maintenance.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Equipment types
        .route("/equipment-types", get(api::equipment_types::list_types))
        .route("/equipment-types", post(api::equipment_types::create_type))
        .route("/equipment-types/:id", get(api::equipment_types::get_type))
        .route("/equipment-types/:id", put(api::equipment_types::update_type))
        .route("/equipment-types/:id", delete(api::equipment_types::delete_type))
        .route(
            "/equipment-types/manufacturer/:manufacturer",
            get(api::equipment_types::list_by_manufacturer),
        )
        .route(
            "/equipment-types/manufacturer/:manufacturer/sorted",
            get(api::equipment_types::list_by_manufacturer_sorted),
        )
        .route("/equipment-types/search", get(api::equipment_types::search))
        .route(
            "/equipment-types/by-name/:type_name",
            get(api::equipment_types::get_by_name),
        )
        .route("/equipment-types/exists", get(api::equipment_types::exists))
        // Employees
        .route("/employees", get(api::employees::list_employees))
        .route("/employees", post(api::employees::create_employee))
        .route("/employees/:id", get(api::employees::get_employee))
        .route("/employees/:id", put(api::employees::update_employee))
        .route("/employees/:id", delete(api::employees::delete_employee))
        .route("/employees/search", get(api::employees::search_employees))
        .route("/employees/by-email/:email", get(api::employees::get_by_email))
        .route(
            "/employees/position/:position",
            get(api::employees::list_by_position),
        )
        .route(
            "/employees/position/:position/sorted",
            get(api::employees::list_by_position_sorted),
        )
        .route("/employees/exists/email", get(api::employees::exists_by_email))
        .route("/employees/count", get(api::employees::count_employees))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route("/equipment/:id/status", patch(api::equipment::change_status))
        .route(
            "/equipment/serial/:serial_number",
            get(api::equipment::get_by_serial),
        )
        .route("/equipment/mac/:mac_address", get(api::equipment::get_by_mac))
        .route("/equipment/ip/:ip_address", get(api::equipment::get_by_ip))
        .route("/equipment/type/:type_id", get(api::equipment::list_by_type))
        .route(
            "/equipment/type/:type_id/status/:status",
            get(api::equipment::list_by_type_and_status),
        )
        .route(
            "/equipment/type/:type_id/count",
            get(api::equipment::count_by_type),
        )
        .route(
            "/equipment/employee/:employee_id",
            get(api::equipment::list_by_employee),
        )
        .route("/equipment/status/:status", get(api::equipment::list_by_status))
        .route(
            "/equipment/status/:status/count",
            get(api::equipment::count_by_status),
        )
        .route("/equipment/search/name", get(api::equipment::search_by_name))
        .route(
            "/equipment/search/address",
            get(api::equipment::search_by_address),
        )
        .route("/equipment/added-after", get(api::equipment::list_added_after))
        .route(
            "/equipment/needs-maintenance",
            get(api::equipment::list_needing_maintenance),
        )
        // Device ports
        .route("/device-ports", get(api::device_ports::list_ports))
        .route("/device-ports", post(api::device_ports::create_port))
        .route("/device-ports/:id", get(api::device_ports::get_port))
        .route("/device-ports/:id", put(api::device_ports::update_port))
        .route("/device-ports/:id", delete(api::device_ports::delete_port))
        .route(
            "/device-ports/:id/connect/:target_id",
            patch(api::device_ports::connect),
        )
        .route(
            "/device-ports/:id/disconnect",
            patch(api::device_ports::disconnect),
        )
        .route(
            "/device-ports/:id/status",
            patch(api::device_ports::change_status),
        )
        .route(
            "/device-ports/:id/connected",
            get(api::device_ports::get_connected),
        )
        .route(
            "/device-ports/:id/is-connected",
            get(api::device_ports::is_connected),
        )
        .route(
            "/device-ports/equipment/:equipment_id",
            get(api::device_ports::list_by_equipment),
        )
        .route(
            "/device-ports/equipment/:equipment_id/port/:port_number",
            get(api::device_ports::get_by_equipment_and_number),
        )
        .route(
            "/device-ports/equipment/:equipment_id/active",
            get(api::device_ports::list_active),
        )
        .route(
            "/device-ports/equipment/:equipment_id/available",
            get(api::device_ports::list_available),
        )
        .route(
            "/device-ports/equipment/:equipment_id/occupied",
            get(api::device_ports::list_occupied),
        )
        .route(
            "/device-ports/equipment/:equipment_id/type/:port_type/status/:status",
            get(api::device_ports::list_by_equipment_type_and_status),
        )
        .route(
            "/device-ports/equipment/:equipment_id/count",
            get(api::device_ports::count_by_equipment),
        )
        .route(
            "/device-ports/equipment/:equipment_id/count-active",
            get(api::device_ports::count_active),
        )
        .route(
            "/device-ports/connected-to/:equipment_id",
            get(api::device_ports::list_connected_to),
        )
        .route(
            "/device-ports/status/:status",
            get(api::device_ports::list_by_status),
        )
        .route(
            "/device-ports/type/:port_type",
            get(api::device_ports::list_by_port_type),
        )
        // IP addresses
        .route("/ip-addresses", get(api::ip_addresses::list_ip_addresses))
        .route("/ip-addresses", post(api::ip_addresses::create_ip_address))
        .route("/ip-addresses/:id", get(api::ip_addresses::get_ip_address))
        .route("/ip-addresses/:id", put(api::ip_addresses::update_ip_address))
        .route(
            "/ip-addresses/:id",
            delete(api::ip_addresses::delete_ip_address),
        )
        .route(
            "/ip-addresses/:id/set-primary",
            patch(api::ip_addresses::set_primary),
        )
        .route(
            "/ip-addresses/:id/unset-primary",
            patch(api::ip_addresses::unset_primary),
        )
        .route("/ip-addresses/search", get(api::ip_addresses::search_by_ip))
        .route("/ip-addresses/exists", get(api::ip_addresses::exists))
        .route(
            "/ip-addresses/equipment/:equipment_id",
            get(api::ip_addresses::list_by_equipment),
        )
        .route(
            "/ip-addresses/equipment/:equipment_id/primary",
            get(api::ip_addresses::get_primary),
        )
        .route(
            "/ip-addresses/equipment/:equipment_id/network-type/:network_type",
            get(api::ip_addresses::list_by_equipment_and_network_type),
        )
        .route(
            "/ip-addresses/equipment/:equipment_id/count",
            get(api::ip_addresses::count_by_equipment),
        )
        .route(
            "/ip-addresses/network-type/:network_type",
            get(api::ip_addresses::list_by_network_type),
        )
        .route(
            "/ip-addresses/subnet-mask/:mask",
            get(api::ip_addresses::list_by_subnet_mask),
        )
        // Maintenance history
        .route("/maintenance-history", get(api::maintenance::list_records))
        .route("/maintenance-history", post(api::maintenance::create_record))
        .route("/maintenance-history/:id", get(api::maintenance::get_record))
        .route("/maintenance-history/:id", put(api::maintenance::update_record))
        .route(
            "/maintenance-history/:id",
            delete(api::maintenance::delete_record),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id",
            get(api::maintenance::list_by_equipment),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id/latest",
            get(api::maintenance::get_latest),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id/type/:maintenance_type",
            get(api::maintenance::list_by_equipment_and_type),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id/recent",
            get(api::maintenance::list_recent),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id/schedule-next",
            patch(api::maintenance::schedule_next),
        )
        .route(
            "/maintenance-history/equipment/:equipment_id/count",
            get(api::maintenance::count_by_equipment),
        )
        .route(
            "/maintenance-history/employee/:employee_id",
            get(api::maintenance::list_by_employee),
        )
        .route(
            "/maintenance-history/date-range",
            get(api::maintenance::list_by_date_range),
        )
        .route("/maintenance-history/overdue", get(api::maintenance::list_overdue))
        .route(
            "/maintenance-history/type/:maintenance_type",
            get(api::maintenance::list_by_type),
        )
        .route(
            "/maintenance-history/type/:maintenance_type/count",
            get(api::maintenance::count_by_type),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
