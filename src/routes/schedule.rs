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
    db::models::schedule::{
        CreateAssignmentRequest, CreateTimeRangeRequest, ScheduleQuery, UpdateNotesRequest,
        UpdateTimeRangeRequest,
    },
    error::AppResult,
    services::schedule_service::ScheduleService,
};

pub async fn get_schedule(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ScheduleQuery>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let schedule =
        ScheduleService::get_schedule(&mut conn, params.position_id, params.week_start)?;
    Ok(Json(schedule))
}

pub async fn create_time_range(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<CreateTimeRangeRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let block = ScheduleService::create_time_range(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": block.id, "message": "Time range created successfully" })),
    ))
}

pub async fn update_time_range(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTimeRangeRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ScheduleService::update_time_range(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Time range updated successfully" })))
}

pub async fn delete_time_range(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ScheduleService::delete_time_range(&mut conn, id)?;
    Ok(Json(json!({ "message": "Time range deleted successfully" })))
}

pub async fn create_assignment(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let assignment = ScheduleService::create_assignment(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": assignment.id, "message": "Assignment created successfully" })),
    ))
}

pub async fn delete_assignment(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ScheduleService::delete_assignment(&mut conn, id)?;
    Ok(Json(json!({ "message": "Assignment deleted successfully" })))
}

pub async fn get_notes(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ScheduleQuery>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let notes = ScheduleService::get_notes(&mut conn, params.position_id, params.week_start)?;
    Ok(Json(json!({ "notes": notes })))
}

pub async fn update_notes(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpdateNotesRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    ScheduleService::update_notes(&mut conn, &payload)?;
    Ok(Json(json!({ "message": "Notes updated successfully" })))
}
