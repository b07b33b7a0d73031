use crate::db::enums::ConstraintType;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::constraints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Constraint {
    pub id: i32,
    pub person_id: i32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ConstraintType,
    pub is_full_day: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::constraints)]
pub struct NewConstraint {
    pub person_id: i32,
    pub date: NaiveDate,
    pub kind: ConstraintType,
    pub is_full_day: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct ConstraintWithPerson {
    #[serde(flatten)]
    pub constraint: Constraint,
    pub full_name: String,
    pub rank: String,
}

// API DTOs

#[derive(Deserialize)]
pub struct ConstraintQuery {
    #[serde(alias = "departmentId")]
    #[serde(alias = "department")]
    pub department_id: Option<i32>,
    #[serde(alias = "weekStart")]
    #[serde(alias = "week")]
    pub week_start: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct UpsertConstraintRequest {
    pub person_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<ConstraintType>,
    #[serde(default)]
    pub is_full_day: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
}
