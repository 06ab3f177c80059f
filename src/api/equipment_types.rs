//! Equipment type API endpoints

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
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
};

#[derive(Deserialize, IntoParams)]
pub struct TypeSearchQuery {
    pub manufacturer: String,
    pub model: String,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TypeNameQuery {
    pub type_name: String,
}

/// List all equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment-types",
    responses(
        (status = 200, description = "Equipment type list", body = Vec<EquipmentType>)
    )
)]
pub async fn list_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state.services.equipment_types.list().await?;
    Ok(Json(types))
}

/// Get equipment type by ID
#[utoipa::path(
    get,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i64, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type details", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn get_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.equipment_types.get_by_id(id).await?;
    Ok(Json(equipment_type))
}

/// Create an equipment type
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    request_body = CreateEquipmentType,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 409, description = "Type name already taken")
    )
)]
pub async fn create_type(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipmentType>,
) -> AppResult<(StatusCode, Json<EquipmentType>)> {
    data.validate()?;
    let equipment_type = state.services.equipment_types.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment_type)))
}

/// Update an equipment type
#[utoipa::path(
    put,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i64, Path, description = "Equipment type ID")),
    request_body = UpdateEquipmentType,
    responses(
        (status = 200, description = "Equipment type updated", body = EquipmentType),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Type name already taken")
    )
)]
pub async fn update_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEquipmentType>,
) -> AppResult<Json<EquipmentType>> {
    data.validate()?;
    let equipment_type = state.services.equipment_types.update(id, &data).await?;
    Ok(Json(equipment_type))
}

/// Delete an equipment type; fails while equipment references it
#[utoipa::path(
    delete,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i64, Path, description = "Equipment type ID")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Equipment type still in use")
    )
)]
pub async fn delete_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List equipment types of a manufacturer
#[utoipa::path(
    get,
    path = "/equipment-types/manufacturer/{manufacturer}",
    tag = "equipment-types",
    params(("manufacturer" = String, Path, description = "Manufacturer name")),
    responses(
        (status = 200, description = "Equipment types of the manufacturer", body = Vec<EquipmentType>)
    )
)]
pub async fn list_by_manufacturer(
    State(state): State<crate::AppState>,
    Path(manufacturer): Path<String>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state
        .services
        .equipment_types
        .list_by_manufacturer(&manufacturer)
        .await?;
    Ok(Json(types))
}

/// List equipment types of a manufacturer, sorted by model
#[utoipa::path(
    get,
    path = "/equipment-types/manufacturer/{manufacturer}/sorted",
    tag = "equipment-types",
    params(("manufacturer" = String, Path, description = "Manufacturer name")),
    responses(
        (status = 200, description = "Equipment types sorted by model", body = Vec<EquipmentType>)
    )
)]
pub async fn list_by_manufacturer_sorted(
    State(state): State<crate::AppState>,
    Path(manufacturer): Path<String>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state
        .services
        .equipment_types
        .list_by_manufacturer_sorted(&manufacturer)
        .await?;
    Ok(Json(types))
}

/// Find an equipment type by manufacturer and model
#[utoipa::path(
    get,
    path = "/equipment-types/search",
    tag = "equipment-types",
    params(TypeSearchQuery),
    responses(
        (status = 200, description = "Matching equipment type", body = EquipmentType),
        (status = 404, description = "No matching equipment type")
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    Query(query): Query<TypeSearchQuery>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state
        .services
        .equipment_types
        .get_by_manufacturer_and_model(&query.manufacturer, &query.model)
        .await?;
    Ok(Json(equipment_type))
}

/// Get equipment type by its unique name
#[utoipa::path(
    get,
    path = "/equipment-types/by-name/{typeName}",
    tag = "equipment-types",
    params(("typeName" = String, Path, description = "Type name")),
    responses(
        (status = 200, description = "Equipment type details", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn get_by_name(
    State(state): State<crate::AppState>,
    Path(type_name): Path<String>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.equipment_types.get_by_name(&type_name).await?;
    Ok(Json(equipment_type))
}

/// Check whether a type name is taken
#[utoipa::path(
    get,
    path = "/equipment-types/exists",
    tag = "equipment-types",
    params(TypeNameQuery),
    responses(
        (status = 200, description = "Whether the type name exists", body = bool)
    )
)]
pub async fn exists(
    State(state): State<crate::AppState>,
    Query(query): Query<TypeNameQuery>,
) -> AppResult<Json<bool>> {
    let exists = state
        .services
        .equipment_types
        .exists_by_name(&query.type_name)
        .await?;
    Ok(Json(exists))
}
