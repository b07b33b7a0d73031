use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool, db::models::skill::UpsertSkillRequest, error::AppResult,
    services::skills_service::SkillsService,
};

pub async fn get_skills(State(pool): State<Arc<DbPool>>) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = SkillsService::list(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_skill(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let skill = SkillsService::get(&mut conn, id)?;
    Ok(Json(skill))
}

pub async fn create_skill(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertSkillRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let skill = SkillsService::create(&mut conn, &payload)?;
    Ok(Json(
        json!({ "id": skill.id, "message": "Skill created successfully" }),
    ))
}

pub async fn update_skill(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertSkillRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    SkillsService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Skill updated successfully" })))
}

pub async fn delete_skill(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    SkillsService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Skill deleted successfully" })))
}
