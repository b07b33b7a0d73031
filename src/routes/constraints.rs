use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::constraint::{ConstraintQuery, UpsertConstraintRequest},
    error::AppResult,
    services::constraints_service::ConstraintsService,
};

pub async fn get_constraints(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ConstraintQuery>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = ConstraintsService::list(&mut conn, &params)?;
    Ok(Json(rows))
}

pub async fn get_constraint(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let constraint = ConstraintsService::get(&mut conn, id)?;
    Ok(Json(constraint))
}

pub async fn create_constraint(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertConstraintRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let constraint = ConstraintsService::create(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": constraint.id, "message": "Constraint created successfully" })),
    ))
}

pub async fn update_constraint(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertConstraintRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ConstraintsService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Constraint updated successfully" })))
}

pub async fn delete_constraint(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ConstraintsService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Constraint deleted successfully" })))
}
