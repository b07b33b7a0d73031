pub mod constraints;
pub mod departments;
pub mod personnel;
pub mod populations;
pub mod positions;
pub mod schedule;
pub mod skills;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::db::DbPool;

pub fn create_router(pool: Arc<DbPool>) -> Router {
    Router::new()
        .route("/personnel", get(personnel::get_personnel))
        .route("/personnel", post(personnel::create_person))
        .route("/personnel/batch/population", post(personnel::batch_population))
        .route("/personnel/batch/department", post(personnel::batch_department))
        .route("/personnel/batch-skills", post(personnel::batch_skills))
        .route("/personnel/:id", get(personnel::get_person))
        .route("/personnel/:id", put(personnel::update_person))
        .route("/personnel/:id", delete(personnel::delete_person))
        .route("/personnel/:id/skills", get(personnel::get_person_skills))
        .route("/personnel/:id/skills", post(personnel::assign_person_skill))
        .route(
            "/personnel/:id/skills/:skill_id",
            put(personnel::update_person_skill),
        )
        .route(
            "/personnel/:id/skills/:skill_id",
            delete(personnel::remove_person_skill),
        )
        .route("/departments", get(departments::get_departments))
        .route("/departments", post(departments::create_department))
        .route("/departments/:id", get(departments::get_department))
        .route("/departments/:id", put(departments::update_department))
        .route("/departments/:id", delete(departments::delete_department))
        .route(
            "/departments/:id/available-personnel",
            get(departments::get_available_personnel),
        )
        .route("/departments/:id/members", get(departments::get_members))
        .route("/departments/:id/commander", post(departments::assign_commander))
        .route(
            "/departments/:id/commander",
            delete(departments::remove_commander),
        )
        .route("/populations", get(populations::get_populations))
        .route("/populations", post(populations::create_population))
        .route("/populations/:id", get(populations::get_population))
        .route("/populations/:id", put(populations::update_population))
        .route("/populations/:id", delete(populations::delete_population))
        .route("/skills", get(skills::get_skills))
        .route("/skills", post(skills::create_skill))
        .route("/skills/:id", get(skills::get_skill))
        .route("/skills/:id", put(skills::update_skill))
        .route("/skills/:id", delete(skills::delete_skill))
        .route("/positions", get(positions::get_positions))
        .route("/positions", post(positions::create_position))
        .route("/positions/:id", get(positions::get_position))
        .route("/positions/:id", put(positions::update_position))
        .route("/positions/:id", delete(positions::delete_position))
        .route("/positions/:id/roles", get(positions::get_roles))
        .route("/positions/:id/roles", post(positions::create_role))
        .route(
            "/positions/:position_id/roles/:id",
            put(positions::update_role),
        )
        .route(
            "/positions/:position_id/roles/:id",
            delete(positions::delete_role),
        )
        .route("/constraints", get(constraints::get_constraints))
        .route("/constraints", post(constraints::create_constraint))
        .route("/constraints/:id", get(constraints::get_constraint))
        .route("/constraints/:id", put(constraints::update_constraint))
        .route("/constraints/:id", delete(constraints::delete_constraint))
        .route("/schedule", get(schedule::get_schedule))
        .route("/schedule/notes", get(schedule::get_notes))
        .route("/schedule/notes", put(schedule::update_notes))
        .route("/time-ranges", post(schedule::create_time_range))
        .route("/time-ranges/:id", put(schedule::update_time_range))
        .route("/time-ranges/:id", delete(schedule::delete_time_range))
        .route("/assignments", post(schedule::create_assignment))
        .route("/assignments/:id", delete(schedule::delete_assignment))
        .with_state(pool)
}
