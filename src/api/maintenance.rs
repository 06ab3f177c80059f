//! Maintenance history API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenance, MaintenanceView, UpdateMaintenance},
};

#[derive(Deserialize, IntoParams)]
pub struct DateRangeQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams)]
pub struct RecentQuery {
    /// Days to look back; defaults to 30
    pub days: Option<i64>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct NextDateQuery {
    pub next_date: NaiveDate,
}

/// List all maintenance records, newest first
#[utoipa::path(
    get,
    path = "/maintenance-history",
    tag = "maintenance-history",
    responses(
        (status = 200, description = "Maintenance record list", body = Vec<MaintenanceView>)
    )
)]
pub async fn list_records(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state.services.maintenance.list().await?;
    Ok(Json(records))
}

/// Get maintenance record by ID
#[utoipa::path(
    get,
    path = "/maintenance-history/{id}",
    tag = "maintenance-history",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    responses(
        (status = 200, description = "Maintenance record details", body = MaintenanceView),
        (status = 404, description = "Maintenance record not found")
    )
)]
pub async fn get_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MaintenanceView>> {
    let record = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(record))
}

/// Create a maintenance record
#[utoipa::path(
    post,
    path = "/maintenance-history",
    tag = "maintenance-history",
    request_body = CreateMaintenance,
    responses(
        (status = 201, description = "Maintenance record created", body = MaintenanceView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Equipment or employee not found")
    )
)]
pub async fn create_record(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<MaintenanceView>)> {
    data.validate()?;
    let record = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a maintenance record
#[utoipa::path(
    put,
    path = "/maintenance-history/{id}",
    tag = "maintenance-history",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    request_body = UpdateMaintenance,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Record, equipment or employee not found")
    )
)]
pub async fn update_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateMaintenance>,
) -> AppResult<Json<MaintenanceView>> {
    data.validate()?;
    let record = state.services.maintenance.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a maintenance record
#[utoipa::path(
    delete,
    path = "/maintenance-history/{id}",
    tag = "maintenance-history",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    responses(
        (status = 204, description = "Maintenance record deleted"),
        (status = 404, description = "Maintenance record not found")
    )
)]
pub async fn delete_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Maintenance history of an equipment, newest first
#[utoipa::path(
    get,
    path = "/maintenance-history/equipment/{equipmentId}",
    tag = "maintenance-history",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Maintenance history", body = Vec<MaintenanceView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_by_equipment(equipment_id)
        .await?;
    Ok(Json(records))
}

/// The most recent maintenance record of an equipment
#[utoipa::path(
    get,
    path = "/maintenance-history/equipment/{equipmentId}/latest",
    tag = "maintenance-history",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Latest maintenance record", body = MaintenanceView),
        (status = 404, description = "Equipment not found or has no history")
    )
)]
pub async fn get_latest(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<MaintenanceView>> {
    let record = state.services.maintenance.get_latest(equipment_id).await?;
    Ok(Json(record))
}

/// Maintenance records of an equipment filtered by type
#[utoipa::path(
    get,
    path = "/maintenance-history/equipment/{equipmentId}/type/{type}",
    tag = "maintenance-history",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        ("type" = String, Path, description = "Maintenance type")
    ),
    responses(
        (status = 200, description = "Matching records", body = Vec<MaintenanceView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment_and_type(
    State(state): State<crate::AppState>,
    Path((equipment_id, maintenance_type)): Path<(i64, String)>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_by_equipment_and_type(equipment_id, &maintenance_type)
        .await?;
    Ok(Json(records))
}

/// Maintenance records performed by an employee
#[utoipa::path(
    get,
    path = "/maintenance-history/employee/{employeeId}",
    tag = "maintenance-history",
    params(("employeeId" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Records performed by the employee", body = Vec<MaintenanceView>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn list_by_employee(
    State(state): State<crate::AppState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_by_employee(employee_id)
        .await?;
    Ok(Json(records))
}

/// Maintenance records within a date range
#[utoipa::path(
    get,
    path = "/maintenance-history/date-range",
    tag = "maintenance-history",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Records within the range", body = Vec<MaintenanceView>),
        (status = 400, description = "End precedes start")
    )
)]
pub async fn list_by_date_range(
    State(state): State<crate::AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_by_date_range(query.start, query.end)
        .await?;
    Ok(Json(records))
}

/// Recent maintenance records of an equipment
#[utoipa::path(
    get,
    path = "/maintenance-history/equipment/{equipmentId}/recent",
    tag = "maintenance-history",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        RecentQuery
    ),
    responses(
        (status = 200, description = "Recent records", body = Vec<MaintenanceView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_recent(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_recent(equipment_id, query.days)
        .await?;
    Ok(Json(records))
}

/// Maintenance records by type across all equipment
#[utoipa::path(
    get,
    path = "/maintenance-history/type/{type}",
    tag = "maintenance-history",
    params(("type" = String, Path, description = "Maintenance type")),
    responses(
        (status = 200, description = "Records of the type", body = Vec<MaintenanceView>)
    )
)]
pub async fn list_by_type(
    State(state): State<crate::AppState>,
    Path(maintenance_type): Path<String>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state
        .services
        .maintenance
        .list_by_type(&maintenance_type)
        .await?;
    Ok(Json(records))
}

/// Records whose next maintenance date has passed, soonest first
#[utoipa::path(
    get,
    path = "/maintenance-history/overdue",
    tag = "maintenance-history",
    responses(
        (status = 200, description = "Overdue records", body = Vec<MaintenanceView>)
    )
)]
pub async fn list_overdue(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceView>>> {
    let records = state.services.maintenance.list_overdue().await?;
    Ok(Json(records))
}

/// Set the next maintenance date on the equipment's latest record
#[utoipa::path(
    patch,
    path = "/maintenance-history/equipment/{equipmentId}/schedule-next",
    tag = "maintenance-history",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        NextDateQuery
    ),
    responses(
        (status = 200, description = "Next maintenance scheduled", body = MaintenanceView),
        (status = 404, description = "Equipment not found or has no history")
    )
)]
pub async fn schedule_next(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
    Query(query): Query<NextDateQuery>,
) -> AppResult<Json<MaintenanceView>> {
    let record = state
        .services
        .maintenance
        .schedule_next(equipment_id, query.next_date)
        .await?;
    Ok(Json(record))
}

/// Count maintenance records of an equipment
#[utoipa::path(
    get,
    path = "/maintenance-history/equipment/{equipmentId}/count",
    tag = "maintenance-history",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Record count", body = i64),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn count_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let count = state
        .services
        .maintenance
        .count_by_equipment(equipment_id)
        .await?;
    Ok(Json(count))
}

/// Count maintenance records by type
#[utoipa::path(
    get,
    path = "/maintenance-history/type/{type}/count",
    tag = "maintenance-history",
    params(("type" = String, Path, description = "Maintenance type")),
    responses(
        (status = 200, description = "Record count", body = i64)
    )
)]
pub async fn count_by_type(
    State(state): State<crate::AppState>,
    Path(maintenance_type): Path<String>,
) -> AppResult<Json<i64>> {
    let count = state
        .services
        .maintenance
        .count_by_type(&maintenance_type)
        .await?;
    Ok(Json(count))
}
