use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    db::DbPool, db::models::population::UpsertPopulationRequest, error::AppResult,
    services::populations_service::PopulationsService,
};

pub async fn get_populations(State(pool): State<Arc<DbPool>>) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let rows = PopulationsService::list(&mut conn)?;
    Ok(Json(rows))
}

pub async fn get_population(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let population = PopulationsService::get(&mut conn, id)?;
    Ok(Json(population))
}

pub async fn create_population(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UpsertPopulationRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    let population = PopulationsService::create(&mut conn, &payload)?;
    Ok(Json(
        json!({ "id": population.id, "message": "Population created successfully" }),
    ))
}

pub async fn update_population(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertPopulationRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PopulationsService::update(&mut conn, id, &payload)?;
    Ok(Json(json!({ "message": "Population updated successfully" })))
}

pub async fn delete_population(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut conn = pool.get()?;
    PopulationsService::delete(&mut conn, id)?;
    Ok(Json(json!({ "message": "Population deleted successfully" })))
}
