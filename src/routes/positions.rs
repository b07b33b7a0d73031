use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::position::{UpsertPositionRequest, UpsertRoleRequest},
    error::AppResult,
    services::positions_service::PositionsService,
};

pub async fn get_positions(State(pool): State<Arc<DbPool>>) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = PositionsService::list(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_position(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let detail = PositionsService::get(&mut conn, id)?;
    Ok(Json(detail))
}

pub async fn create_position(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertPositionRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let position = PositionsService::create(&mut conn, &payload)?;
    Ok(Json(
        json!({ "id": position.id, "message": "Position created successfully" }),
    ))
}

pub async fn update_position(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertPositionRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let (name, holder_count) = PositionsService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({
        "message": format!("Position \"{}\" updated with {} role holders", name, holder_count)
    })))
}

pub async fn delete_position(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PositionsService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Position deleted successfully" })))
}

pub async fn get_roles(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = PositionsService::roles(&mut conn, id)?;
    Ok(Json(rows))
}

pub async fn create_role(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let role = PositionsService::create_role(&mut conn, id, &payload)?;
    Ok(Json(
        json!({ "id": role.id, "message": "Role created successfully" }),
    ))
}

pub async fn update_role(
    State(pool): State<Arc<DbPool>>,
    Path((position_id, id)): Path<(i32, i32)>,
    Json(payload): Json<UpsertRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PositionsService::update_role(&mut conn, position_id, id, &payload)?;
    Ok(Json(json!({ "message": "Role updated successfully" })))
}

pub async fn delete_role(
    State(pool): State<Arc<DbPool>>,
    Path((_position_id, id)): Path<(i32, i32)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PositionsService::delete_role(&mut conn, id)?;
    Ok(Json(json!({ "message": "Role deleted successfully" })))
}
