//! Employee API endpoints

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
    models::employee::{CreateEmployee, Employee, UpdateEmployee},
};

#[derive(Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee list", body = Vec<Employee>)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    data.validate()?;
    let employee = state.services.employees.create(&data).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    data.validate()?;
    let employee = state.services.employees.update(id, &data).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Case-insensitive substring search on full name
#[utoipa::path(
    get,
    path = "/employees/search",
    tag = "employees",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching employees", body = Vec<Employee>)
    )
)]
pub async fn search_employees(
    State(state): State<crate::AppState>,
    Query(query): Query<NameQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.search_by_name(&query.name).await?;
    Ok(Json(employees))
}

/// Get employee by email
#[utoipa::path(
    get,
    path = "/employees/by-email/{email}",
    tag = "employees",
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_by_email(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_email(&email).await?;
    Ok(Json(employee))
}

/// List employees holding a position
#[utoipa::path(
    get,
    path = "/employees/position/{position}",
    tag = "employees",
    params(("position" = String, Path, description = "Position title")),
    responses(
        (status = 200, description = "Employees holding the position", body = Vec<Employee>)
    )
)]
pub async fn list_by_position(
    State(state): State<crate::AppState>,
    Path(position): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list_by_position(&position).await?;
    Ok(Json(employees))
}

/// List employees holding a position, sorted by name
#[utoipa::path(
    get,
    path = "/employees/position/{position}/sorted",
    tag = "employees",
    params(("position" = String, Path, description = "Position title")),
    responses(
        (status = 200, description = "Employees sorted by name", body = Vec<Employee>)
    )
)]
pub async fn list_by_position_sorted(
    State(state): State<crate::AppState>,
    Path(position): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .services
        .employees
        .list_by_position_sorted(&position)
        .await?;
    Ok(Json(employees))
}

/// Check whether an email is taken
#[utoipa::path(
    get,
    path = "/employees/exists/email",
    tag = "employees",
    params(EmailQuery),
    responses(
        (status = 200, description = "Whether the email exists", body = bool)
    )
)]
pub async fn exists_by_email(
    State(state): State<crate::AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<bool>> {
    let exists = state.services.employees.exists_by_email(&query.email).await?;
    Ok(Json(exists))
}

/// Count all employees
#[utoipa::path(
    get,
    path = "/employees/count",
    tag = "employees",
    responses(
        (status = 200, description = "Employee count", body = i64)
    )
)]
pub async fn count_employees(State(state): State<crate::AppState>) -> AppResult<Json<i64>> {
    let count = state.services.employees.count().await?;
    Ok(Json(count))
}
