use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::person::{
        BatchDepartmentRequest, BatchPopulationRequest, BatchSkillsRequest, PersonnelQuery,
        UpsertPersonRequest,
    },
    db::models::person_skill::{CreatePersonSkillRequest, UpdatePersonSkillRequest},
    error::AppResult,
    services::person_skills_service::PersonSkillsService,
    services::personnel_service::PersonnelService,
};

pub async fn get_personnel(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<PersonnelQuery>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = PersonnelService::list(&mut conn, &params)?;
    Ok(Json(rows))
}

pub async fn get_person(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let person = PersonnelService::get(&mut conn, id)?;
    Ok(Json(person))
}

pub async fn create_person(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertPersonRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let person = PersonnelService::create(&mut conn, &payload)?;
    Ok(Json(
        json!({ "id": person.id, "message": "Personnel created successfully" }),
    ))
}

pub async fn update_person(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertPersonRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PersonnelService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Personnel updated successfully" })))
}

pub async fn delete_person(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PersonnelService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Personnel deleted successfully" })))
}

pub async fn batch_population(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<BatchPopulationRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let outcome =
        PersonnelService::batch_set_population(&mut conn, &payload.ids, payload.population_id)?;
    Ok(Json(outcome))
}

pub async fn batch_department(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<BatchDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let outcome =
        PersonnelService::batch_set_department(&mut conn, &payload.ids, payload.department_id)?;
    Ok(Json(outcome))
}

pub async fn batch_skills(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<BatchSkillsRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let outcome =
        PersonnelService::batch_assign_skills(&mut conn, &payload.ids, &payload.skill_ids)?;
    Ok(Json(outcome))
}

pub async fn get_person_skills(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = PersonSkillsService::list_for_person(&mut conn, id)?;
    Ok(Json(rows))
}

pub async fn assign_person_skill(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<CreatePersonSkillRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let record = PersonSkillsService::create(&mut conn, id, &payload)?;
    Ok(Json(
        json!({ "id": record.id, "message": "Skill assigned successfully" }),
    ))
}

pub async fn update_person_skill(
    State(pool): State<Arc<DbPool>>,
    Path((id, skill_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdatePersonSkillRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PersonSkillsService::update(&mut conn, id, skill_id, &payload)?;
    Ok(Json(
        json!({ "message": "Skill assignment updated successfully" }),
    ))
}

pub async fn remove_person_skill(
    State(pool): State<Arc<DbPool>>,
    Path((id, skill_id)): Path<(i32, i32)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PersonSkillsService::delete(&mut conn, id, skill_id)?;
    Ok(Json(
        json!({ "message": "Skill assignment removed successfully" }),
    ))
}
