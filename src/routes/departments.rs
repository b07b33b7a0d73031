use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::department::{AssignCommanderRequest, UpsertDepartmentRequest},
    error::AppResult,
    services::departments_service::DepartmentsService,
};

pub async fn get_departments(State(pool): State<Arc<DbPool>>) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = DepartmentsService::list(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_department(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let detail = DepartmentsService::get(&mut conn, id)?;
    Ok(Json(detail))
}

pub async fn create_department(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let department = DepartmentsService::create(&mut conn, &payload)?;
    Ok(Json(
        json!({ "id": department.id, "message": "Department created successfully" }),
    ))
}

pub async fn update_department(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    DepartmentsService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Department updated successfully" })))
}

pub async fn delete_department(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    DepartmentsService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Department deleted successfully" })))
}

pub async fn get_available_personnel(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = DepartmentsService::available_personnel(&mut conn, id)?;
    Ok(Json(rows))
}

pub async fn get_members(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = DepartmentsService::members(&mut conn, id)?;
    Ok(Json(rows))
}

pub async fn assign_commander(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<AssignCommanderRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    DepartmentsService::assign_commander(&mut conn, id, payload.person_id)?;
    Ok(Json(
        json!({ "message": "Department commander assigned successfully" }),
    ))
}

pub async fn remove_commander(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    DepartmentsService::remove_commander(&mut conn, id)?;
    Ok(Json(
        json!({ "message": "Department commander removed successfully" }),
    ))
}
