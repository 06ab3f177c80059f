//! Device port API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppResult,
    models::device_port::{CreateDevicePort, DevicePortView, UpdateDevicePort},
};

#[derive(Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: String,
}

/// List all device ports
#[utoipa::path(
    get,
    path = "/device-ports",
    tag = "device-ports",
    responses(
        (status = 200, description = "Device port list", body = Vec<DevicePortView>)
    )
)]
pub async fn list_ports(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state.services.device_ports.list().await?;
    Ok(Json(ports))
}

/// Get device port by ID
#[utoipa::path(
    get,
    path = "/device-ports/{id}",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    responses(
        (status = 200, description = "Device port details", body = DevicePortView),
        (status = 404, description = "Device port not found")
    )
)]
pub async fn get_port(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DevicePortView>> {
    let port = state.services.device_ports.get_by_id(id).await?;
    Ok(Json(port))
}

/// Create a device port
#[utoipa::path(
    post,
    path = "/device-ports",
    tag = "device-ports",
    request_body = CreateDevicePort,
    responses(
        (status = 201, description = "Device port created", body = DevicePortView),
        (status = 400, description = "Validation failed or invalid connection pair"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Port number already taken on this equipment")
    )
)]
pub async fn create_port(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateDevicePort>,
) -> AppResult<(StatusCode, Json<DevicePortView>)> {
    data.validate()?;
    let port = state.services.device_ports.create(&data).await?;
    Ok((StatusCode::CREATED, Json(port)))
}

/// Update a device port
#[utoipa::path(
    put,
    path = "/device-ports/{id}",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    request_body = UpdateDevicePort,
    responses(
        (status = 200, description = "Device port updated", body = DevicePortView),
        (status = 400, description = "Validation failed or invalid connection pair"),
        (status = 404, description = "Device port or equipment not found"),
        (status = 409, description = "Port number already taken on this equipment")
    )
)]
pub async fn update_port(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateDevicePort>,
) -> AppResult<Json<DevicePortView>> {
    data.validate()?;
    let port = state.services.device_ports.update(id, &data).await?;
    Ok(Json(port))
}

/// Delete a device port
#[utoipa::path(
    delete,
    path = "/device-ports/{id}",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    responses(
        (status = 204, description = "Device port deleted"),
        (status = 404, description = "Device port not found")
    )
)]
pub async fn delete_port(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.device_ports.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List ports of an equipment, ordered by port number
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Ports of the equipment", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state
        .services
        .device_ports
        .list_by_equipment(equipment_id)
        .await?;
    Ok(Json(ports))
}

/// Get a specific port of an equipment by port number
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/port/{portNumber}",
    tag = "device-ports",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        ("portNumber" = i32, Path, description = "Port number")
    ),
    responses(
        (status = 200, description = "Device port details", body = DevicePortView),
        (status = 404, description = "Port not found")
    )
)]
pub async fn get_by_equipment_and_number(
    State(state): State<crate::AppState>,
    Path((equipment_id, port_number)): Path<(i64, i32)>,
) -> AppResult<Json<DevicePortView>> {
    let port = state
        .services
        .device_ports
        .get_by_equipment_and_number(equipment_id, port_number)
        .await?;
    Ok(Json(port))
}

/// List ports by status across all equipment
#[utoipa::path(
    get,
    path = "/device-ports/status/{status}",
    tag = "device-ports",
    params(("status" = String, Path, description = "Port status")),
    responses(
        (status = 200, description = "Ports with the status", body = Vec<DevicePortView>),
        (status = 400, description = "Unknown status")
    )
)]
pub async fn list_by_status(
    State(state): State<crate::AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state.services.device_ports.list_by_status(&status).await?;
    Ok(Json(ports))
}

/// List active ports of an equipment
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/active",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Active ports", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_active(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state.services.device_ports.list_active(equipment_id).await?;
    Ok(Json(ports))
}

/// List unconnected ports of an equipment
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/available",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Available ports", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_available(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state
        .services
        .device_ports
        .list_available(equipment_id)
        .await?;
    Ok(Json(ports))
}

/// List connected ports of an equipment
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/occupied",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Occupied ports", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_occupied(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state.services.device_ports.list_occupied(equipment_id).await?;
    Ok(Json(ports))
}

/// List ports on other devices whose connection target is this equipment
#[utoipa::path(
    get,
    path = "/device-ports/connected-to/{equipmentId}",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Ports connecting to the equipment", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_connected_to(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state
        .services
        .device_ports
        .list_connected_to(equipment_id)
        .await?;
    Ok(Json(ports))
}

/// List ports by connector type across all equipment
#[utoipa::path(
    get,
    path = "/device-ports/type/{portType}",
    tag = "device-ports",
    params(("portType" = String, Path, description = "Port type")),
    responses(
        (status = 200, description = "Ports of the type", body = Vec<DevicePortView>)
    )
)]
pub async fn list_by_port_type(
    State(state): State<crate::AppState>,
    Path(port_type): Path<String>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state
        .services
        .device_ports
        .list_by_port_type(&port_type)
        .await?;
    Ok(Json(ports))
}

/// List ports of an equipment filtered by type and status
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/type/{portType}/status/{status}",
    tag = "device-ports",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        ("portType" = String, Path, description = "Port type"),
        ("status" = String, Path, description = "Port status")
    ),
    responses(
        (status = 200, description = "Matching ports", body = Vec<DevicePortView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment_type_and_status(
    State(state): State<crate::AppState>,
    Path((equipment_id, port_type, status)): Path<(i64, String, String)>,
) -> AppResult<Json<Vec<DevicePortView>>> {
    let ports = state
        .services
        .device_ports
        .list_by_equipment_type_and_status(equipment_id, &port_type, &status)
        .await?;
    Ok(Json(ports))
}

/// Connect a source port to a target port on another equipment
#[utoipa::path(
    patch,
    path = "/device-ports/{id}/connect/{targetId}",
    tag = "device-ports",
    params(
        ("id" = i64, Path, description = "Source port ID"),
        ("targetId" = i64, Path, description = "Target port ID")
    ),
    responses(
        (status = 200, description = "Ports connected", body = DevicePortView),
        (status = 400, description = "Self-connection, same equipment, or occupied target"),
        (status = 404, description = "Port not found")
    )
)]
pub async fn connect(
    State(state): State<crate::AppState>,
    Path((id, target_id)): Path<(i64, i64)>,
) -> AppResult<Json<DevicePortView>> {
    let port = state.services.device_ports.connect(id, target_id).await?;
    Ok(Json(port))
}

/// Clear a port's connection target (idempotent)
#[utoipa::path(
    patch,
    path = "/device-ports/{id}/disconnect",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    responses(
        (status = 200, description = "Port disconnected", body = DevicePortView),
        (status = 404, description = "Device port not found")
    )
)]
pub async fn disconnect(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DevicePortView>> {
    let port = state.services.device_ports.disconnect(id).await?;
    Ok(Json(port))
}

/// Change port status
#[utoipa::path(
    patch,
    path = "/device-ports/{id}/status",
    tag = "device-ports",
    params(
        ("id" = i64, Path, description = "Device port ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status changed", body = DevicePortView),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Device port not found")
    )
)]
pub async fn change_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<DevicePortView>> {
    let port = state
        .services
        .device_ports
        .change_status(id, &query.status)
        .await?;
    Ok(Json(port))
}

/// The port this port is connected to
#[utoipa::path(
    get,
    path = "/device-ports/{id}/connected",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    responses(
        (status = 200, description = "Connected port", body = DevicePortView),
        (status = 404, description = "Port not found or not connected")
    )
)]
pub async fn get_connected(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DevicePortView>> {
    let port = state.services.device_ports.get_connected(id).await?;
    Ok(Json(port))
}

/// Whether this port holds a connection target
#[utoipa::path(
    get,
    path = "/device-ports/{id}/is-connected",
    tag = "device-ports",
    params(("id" = i64, Path, description = "Device port ID")),
    responses(
        (status = 200, description = "Connection state", body = bool),
        (status = 404, description = "Device port not found")
    )
)]
pub async fn is_connected(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let connected = state.services.device_ports.is_connected(id).await?;
    Ok(Json(connected))
}

/// Count ports of an equipment
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/count",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Port count", body = i64),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn count_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let count = state
        .services
        .device_ports
        .count_by_equipment(equipment_id)
        .await?;
    Ok(Json(count))
}

/// Count active ports of an equipment
#[utoipa::path(
    get,
    path = "/device-ports/equipment/{equipmentId}/count-active",
    tag = "device-ports",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Active port count", body = i64),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn count_active(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let count = state.services.device_ports.count_active(equipment_id).await?;
    Ok(Json(count))
}
