//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, EquipmentSummary, EquipmentView, UpdateEquipment},
};

#[derive(Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: String,
}

#[derive(Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct AddressQuery {
    pub address: String,
}

#[derive(Deserialize, IntoParams)]
pub struct DateQuery {
    /// ISO date, e.g. 2024-06-01
    pub date: NaiveDate,
}

#[derive(Deserialize, IntoParams)]
pub struct StalenessQuery {
    /// Months since the last update; defaults to the configured threshold
    pub months: Option<u32>,
}

/// List all equipment (summary view)
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentSummary>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID, with resolved relations and child counts
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentView),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EquipmentView>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Referenced type or employee not found"),
        (status = 409, description = "Serial number or MAC address already taken")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentView>)> {
    data.validate()?;
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Equipment, type or employee not found"),
        (status = 409, description = "Serial number or MAC address already taken")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentView>> {
    data.validate()?;
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment and its owned ports, IPs and maintenance history
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change equipment status
#[utoipa::path(
    patch,
    path = "/equipment/{id}/status",
    tag = "equipment",
    params(
        ("id" = i64, Path, description = "Equipment ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status changed", body = EquipmentView),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn change_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<EquipmentView>> {
    let equipment = state.services.equipment.change_status(id, &query.status).await?;
    Ok(Json(equipment))
}

/// Get equipment by serial number
#[utoipa::path(
    get,
    path = "/equipment/serial/{serialNumber}",
    tag = "equipment",
    params(("serialNumber" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentView),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_by_serial(
    State(state): State<crate::AppState>,
    Path(serial_number): Path<String>,
) -> AppResult<Json<EquipmentView>> {
    let equipment = state.services.equipment.get_by_serial(&serial_number).await?;
    Ok(Json(equipment))
}

/// Get equipment by MAC address
#[utoipa::path(
    get,
    path = "/equipment/mac/{macAddress}",
    tag = "equipment",
    params(("macAddress" = String, Path, description = "MAC address")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentView),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_by_mac(
    State(state): State<crate::AppState>,
    Path(mac_address): Path<String>,
) -> AppResult<Json<EquipmentView>> {
    let equipment = state.services.equipment.get_by_mac(&mac_address).await?;
    Ok(Json(equipment))
}

/// Get equipment by its display IP address
#[utoipa::path(
    get,
    path = "/equipment/ip/{ipAddress}",
    tag = "equipment",
    params(("ipAddress" = String, Path, description = "IP address")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentView),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_by_ip(
    State(state): State<crate::AppState>,
    Path(ip_address): Path<String>,
) -> AppResult<Json<EquipmentView>> {
    let equipment = state.services.equipment.get_by_ip(&ip_address).await?;
    Ok(Json(equipment))
}

/// List equipment of a type
#[utoipa::path(
    get,
    path = "/equipment/type/{typeId}",
    tag = "equipment",
    params(("typeId" = i64, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment of the type", body = Vec<EquipmentSummary>),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn list_by_type(
    State(state): State<crate::AppState>,
    Path(type_id): Path<i64>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.list_by_type(type_id).await?;
    Ok(Json(equipment))
}

/// List equipment assigned to an employee
#[utoipa::path(
    get,
    path = "/equipment/employee/{employeeId}",
    tag = "equipment",
    params(("employeeId" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Equipment assigned to the employee", body = Vec<EquipmentSummary>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn list_by_employee(
    State(state): State<crate::AppState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.list_by_employee(employee_id).await?;
    Ok(Json(equipment))
}

/// List equipment by status
#[utoipa::path(
    get,
    path = "/equipment/status/{status}",
    tag = "equipment",
    params(("status" = String, Path, description = "Equipment status")),
    responses(
        (status = 200, description = "Equipment with the status", body = Vec<EquipmentSummary>),
        (status = 400, description = "Unknown status")
    )
)]
pub async fn list_by_status(
    State(state): State<crate::AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.list_by_status(&status).await?;
    Ok(Json(equipment))
}

/// Case-insensitive substring search on name
#[utoipa::path(
    get,
    path = "/equipment/search/name",
    tag = "equipment",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentSummary>)
    )
)]
pub async fn search_by_name(
    State(state): State<crate::AppState>,
    Query(query): Query<NameQuery>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.search_by_name(&query.name).await?;
    Ok(Json(equipment))
}

/// Case-insensitive substring search on physical address
#[utoipa::path(
    get,
    path = "/equipment/search/address",
    tag = "equipment",
    params(AddressQuery),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentSummary>)
    )
)]
pub async fn search_by_address(
    State(state): State<crate::AppState>,
    Query(query): Query<AddressQuery>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state
        .services
        .equipment
        .search_by_address(&query.address)
        .await?;
    Ok(Json(equipment))
}

/// List equipment of a type filtered by status
#[utoipa::path(
    get,
    path = "/equipment/type/{typeId}/status/{status}",
    tag = "equipment",
    params(
        ("typeId" = i64, Path, description = "Equipment type ID"),
        ("status" = String, Path, description = "Equipment status")
    ),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentSummary>),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn list_by_type_and_status(
    State(state): State<crate::AppState>,
    Path((type_id, status)): Path<(i64, String)>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state
        .services
        .equipment
        .list_by_type_and_status(type_id, &status)
        .await?;
    Ok(Json(equipment))
}

/// List equipment added after a date
#[utoipa::path(
    get,
    path = "/equipment/added-after",
    tag = "equipment",
    params(DateQuery),
    responses(
        (status = 200, description = "Equipment added after the date", body = Vec<EquipmentSummary>)
    )
)]
pub async fn list_added_after(
    State(state): State<crate::AppState>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state.services.equipment.list_added_after(query.date).await?;
    Ok(Json(equipment))
}

/// List equipment that has not been updated within the staleness window
#[utoipa::path(
    get,
    path = "/equipment/needs-maintenance",
    tag = "equipment",
    params(StalenessQuery),
    responses(
        (status = 200, description = "Equipment needing maintenance", body = Vec<EquipmentSummary>)
    )
)]
pub async fn list_needing_maintenance(
    State(state): State<crate::AppState>,
    Query(query): Query<StalenessQuery>,
) -> AppResult<Json<Vec<EquipmentSummary>>> {
    let equipment = state
        .services
        .equipment
        .list_needing_maintenance(query.months)
        .await?;
    Ok(Json(equipment))
}

/// Count equipment of a type
#[utoipa::path(
    get,
    path = "/equipment/type/{typeId}/count",
    tag = "equipment",
    params(("typeId" = i64, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment count", body = i64),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn count_by_type(
    State(state): State<crate::AppState>,
    Path(type_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let count = state.services.equipment.count_by_type(type_id).await?;
    Ok(Json(count))
}

/// Count equipment by status
#[utoipa::path(
    get,
    path = "/equipment/status/{status}/count",
    tag = "equipment",
    params(("status" = String, Path, description = "Equipment status")),
    responses(
        (status = 200, description = "Equipment count", body = i64),
        (status = 400, description = "Unknown status")
    )
)]
pub async fn count_by_status(
    State(state): State<crate::AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<i64>> {
    let count = state.services.equipment.count_by_status(&status).await?;
    Ok(Json(count))
}
