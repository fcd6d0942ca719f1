use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    dto::{DtoAssembler, EmployeeDto, EmployeePayload, IdRef},
    error::Result,
    services::{EmployeeMuseumService, EmployeeService},
    state::AppState,
};

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<(StatusCode, Json<EmployeeDto>)> {
    let employee = EmployeeService::new(state.db.clone()).create(payload).await?;
    let dto = DtoAssembler::new(&state.db).employee(employee).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>> {
    let employees = EmployeeService::new(state.db.clone()).get_all().await?;
    Ok(Json(DtoAssembler::new(&state.db).employees(employees).await?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeDto>> {
    let employee = EmployeeService::new(state.db.clone()).get(id).await?;
    Ok(Json(DtoAssembler::new(&state.db).employee(employee).await?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<EmployeeDto>> {
    let employee = EmployeeService::new(state.db.clone()).update(id, payload).await?;
    Ok(Json(DtoAssembler::new(&state.db).employee(employee).await?))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    EmployeeService::new(state.db.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn replace_museum(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
    Json(museum): Json<IdRef>,
) -> Result<Json<EmployeeDto>> {
    let employee = EmployeeMuseumService::new(state.db.clone())
        .replace_museum(employee_id, museum.id)
        .await?;
    Ok(Json(DtoAssembler::new(&state.db).employee(employee).await?))
}

pub async fn remove_museum(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> Result<StatusCode> {
    EmployeeMuseumService::new(state.db.clone())
        .remove_museum(employee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
