use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::positions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Position {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::positions)]
pub struct NewPosition {
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Role {
    pub id: i32,
    pub position_id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::roles)]
pub struct NewRole {
    pub position_id: i32,
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::role_skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoleSkill {
    pub id: i32,
    pub role_id: i32,
    pub skill_id: i32,
    pub is_mandatory: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::role_skills)]
pub struct NewRoleSkill {
    pub role_id: i32,
    pub skill_id: i32,
    pub is_mandatory: bool,
}

#[derive(Serialize)]
pub struct PositionWithCount {
    #[serde(flatten)]
    pub position: Position,
    pub role_count: i64,
}

/// A role-holder as the position detail endpoint presents it.
#[derive(Serialize)]
pub struct RoleHolder {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub qualification_ids: Vec<i32>,
    pub qualification_names: Vec<String>,
}

#[derive(Serialize)]
pub struct PositionDetail {
    #[serde(flatten)]
    pub position: Position,
    pub role_count: i64,
    pub role_holders: Vec<RoleHolder>,
}

#[derive(Serialize)]
pub struct RoleWithSkills {
    #[serde(flatten)]
    pub role: Role,
    pub required_skills: Vec<String>,
    pub skill_ids: Vec<i32>,
    pub skill_mandatory: Vec<bool>,
}

// API DTOs

#[derive(Deserialize)]
pub struct RoleHolderInput {
    pub name: Option<String>,
    pub qualification_ids: Option<Vec<i32>>,
}

#[derive(Deserialize)]
pub struct UpsertPositionRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub role_holders: Option<Vec<RoleHolderInput>>,
}

#[derive(Deserialize, Clone)]
pub struct RequiredSkillInput {
    pub skill_id: i32,
    #[serde(default)]
    pub is_mandatory: bool,
}

#[derive(Deserialize)]
pub struct UpsertRoleRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub required_skills: Option<Vec<RequiredSkillInput>>,
}
