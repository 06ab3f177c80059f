//! IP address API endpoints

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
    models::ip_address::{CreateIpAddress, IpAddressView, UpdateIpAddress},
};

#[derive(Deserialize, IntoParams)]
pub struct IpQuery {
    pub ip: String,
}

/// List all IP address assignments
#[utoipa::path(
    get,
    path = "/ip-addresses",
    tag = "ip-addresses",
    responses(
        (status = 200, description = "IP address list", body = Vec<IpAddressView>)
    )
)]
pub async fn list_ip_addresses(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<IpAddressView>>> {
    let addresses = state.services.ip_addresses.list().await?;
    Ok(Json(addresses))
}

/// Get IP address assignment by ID
#[utoipa::path(
    get,
    path = "/ip-addresses/{id}",
    tag = "ip-addresses",
    params(("id" = i64, Path, description = "IP address ID")),
    responses(
        (status = 200, description = "IP address details", body = IpAddressView),
        (status = 404, description = "IP address not found")
    )
)]
pub async fn get_ip_address(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IpAddressView>> {
    let address = state.services.ip_addresses.get_by_id(id).await?;
    Ok(Json(address))
}

/// Assign an IP address to equipment
#[utoipa::path(
    post,
    path = "/ip-addresses",
    tag = "ip-addresses",
    request_body = CreateIpAddress,
    responses(
        (status = 201, description = "IP address assigned", body = IpAddressView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "IP already assigned or primary conflict")
    )
)]
pub async fn create_ip_address(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateIpAddress>,
) -> AppResult<(StatusCode, Json<IpAddressView>)> {
    data.validate()?;
    let address = state.services.ip_addresses.create(&data).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Update an IP address assignment
#[utoipa::path(
    put,
    path = "/ip-addresses/{id}",
    tag = "ip-addresses",
    params(("id" = i64, Path, description = "IP address ID")),
    request_body = UpdateIpAddress,
    responses(
        (status = 200, description = "IP address updated", body = IpAddressView),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "IP address or equipment not found"),
        (status = 409, description = "IP already assigned or primary conflict")
    )
)]
pub async fn update_ip_address(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateIpAddress>,
) -> AppResult<Json<IpAddressView>> {
    data.validate()?;
    let address = state.services.ip_addresses.update(id, &data).await?;
    Ok(Json(address))
}

/// Delete an IP address assignment
#[utoipa::path(
    delete,
    path = "/ip-addresses/{id}",
    tag = "ip-addresses",
    params(("id" = i64, Path, description = "IP address ID")),
    responses(
        (status = 204, description = "IP address deleted"),
        (status = 404, description = "IP address not found")
    )
)]
pub async fn delete_ip_address(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.ip_addresses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List IP addresses of an equipment
#[utoipa::path(
    get,
    path = "/ip-addresses/equipment/{equipmentId}",
    tag = "ip-addresses",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "IP addresses of the equipment", body = Vec<IpAddressView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<Vec<IpAddressView>>> {
    let addresses = state
        .services
        .ip_addresses
        .list_by_equipment(equipment_id)
        .await?;
    Ok(Json(addresses))
}

/// Get the primary IP address of an equipment
#[utoipa::path(
    get,
    path = "/ip-addresses/equipment/{equipmentId}/primary",
    tag = "ip-addresses",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Primary IP address", body = IpAddressView),
        (status = 404, description = "Equipment not found or has no primary IP")
    )
)]
pub async fn get_primary(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<IpAddressView>> {
    let address = state.services.ip_addresses.get_primary(equipment_id).await?;
    Ok(Json(address))
}

/// Look up an assignment by its IP string
#[utoipa::path(
    get,
    path = "/ip-addresses/search",
    tag = "ip-addresses",
    params(IpQuery),
    responses(
        (status = 200, description = "Matching assignment", body = IpAddressView),
        (status = 404, description = "IP address not found")
    )
)]
pub async fn search_by_ip(
    State(state): State<crate::AppState>,
    Query(query): Query<IpQuery>,
) -> AppResult<Json<IpAddressView>> {
    let address = state.services.ip_addresses.get_by_ip(&query.ip).await?;
    Ok(Json(address))
}

/// List IP addresses by network type
#[utoipa::path(
    get,
    path = "/ip-addresses/network-type/{networkType}",
    tag = "ip-addresses",
    params(("networkType" = String, Path, description = "Network type, e.g. LAN or WAN")),
    responses(
        (status = 200, description = "IP addresses of the network type", body = Vec<IpAddressView>)
    )
)]
pub async fn list_by_network_type(
    State(state): State<crate::AppState>,
    Path(network_type): Path<String>,
) -> AppResult<Json<Vec<IpAddressView>>> {
    let addresses = state
        .services
        .ip_addresses
        .list_by_network_type(&network_type)
        .await?;
    Ok(Json(addresses))
}

/// List IP addresses of an equipment filtered by network type
#[utoipa::path(
    get,
    path = "/ip-addresses/equipment/{equipmentId}/network-type/{networkType}",
    tag = "ip-addresses",
    params(
        ("equipmentId" = i64, Path, description = "Equipment ID"),
        ("networkType" = String, Path, description = "Network type")
    ),
    responses(
        (status = 200, description = "Matching IP addresses", body = Vec<IpAddressView>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_by_equipment_and_network_type(
    State(state): State<crate::AppState>,
    Path((equipment_id, network_type)): Path<(i64, String)>,
) -> AppResult<Json<Vec<IpAddressView>>> {
    let addresses = state
        .services
        .ip_addresses
        .list_by_equipment_and_network_type(equipment_id, &network_type)
        .await?;
    Ok(Json(addresses))
}

/// List IP addresses sharing a subnet mask
#[utoipa::path(
    get,
    path = "/ip-addresses/subnet-mask/{mask}",
    tag = "ip-addresses",
    params(("mask" = String, Path, description = "Subnet mask, URL-encoded")),
    responses(
        (status = 200, description = "IP addresses with the mask", body = Vec<IpAddressView>)
    )
)]
pub async fn list_by_subnet_mask(
    State(state): State<crate::AppState>,
    Path(mask): Path<String>,
) -> AppResult<Json<Vec<IpAddressView>>> {
    let addresses = state.services.ip_addresses.list_by_subnet_mask(&mask).await?;
    Ok(Json(addresses))
}

/// Mark an assignment as the primary address of its equipment
#[utoipa::path(
    patch,
    path = "/ip-addresses/{id}/set-primary",
    tag = "ip-addresses",
    params(("id" = i64, Path, description = "IP address ID")),
    responses(
        (status = 200, description = "Marked primary", body = IpAddressView),
        (status = 404, description = "IP address not found"),
        (status = 409, description = "Another primary IP exists for the equipment")
    )
)]
pub async fn set_primary(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IpAddressView>> {
    let address = state.services.ip_addresses.set_primary(id).await?;
    Ok(Json(address))
}

/// Clear the primary flag on an assignment
#[utoipa::path(
    patch,
    path = "/ip-addresses/{id}/unset-primary",
    tag = "ip-addresses",
    params(("id" = i64, Path, description = "IP address ID")),
    responses(
        (status = 200, description = "Primary flag cleared", body = IpAddressView),
        (status = 404, description = "IP address not found")
    )
)]
pub async fn unset_primary(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IpAddressView>> {
    let address = state.services.ip_addresses.unset_primary(id).await?;
    Ok(Json(address))
}

/// Check whether an IP string is assigned anywhere
#[utoipa::path(
    get,
    path = "/ip-addresses/exists",
    tag = "ip-addresses",
    params(IpQuery),
    responses(
        (status = 200, description = "Whether the IP is assigned", body = bool)
    )
)]
pub async fn exists(
    State(state): State<crate::AppState>,
    Query(query): Query<IpQuery>,
) -> AppResult<Json<bool>> {
    let exists = state.services.ip_addresses.exists_by_ip(&query.ip).await?;
    Ok(Json(exists))
}

/// Count IP addresses of an equipment
#[utoipa::path(
    get,
    path = "/ip-addresses/equipment/{equipmentId}/count",
    tag = "ip-addresses",
    params(("equipmentId" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "IP address count", body = i64),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn count_by_equipment(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<i64>,
) -> AppResult<Json<i64>> {
    let count = state
        .services
        .ip_addresses
        .count_by_equipment(equipment_id)
        .await?;
    Ok(Json(count))
}
