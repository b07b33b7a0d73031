use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::schedule_weeks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScheduleWeek {
    pub id: i32,
    pub position_id: i32,
    pub week_start: NaiveDate,
    pub notes: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::schedule_weeks)]
pub struct NewScheduleWeek {
    pub position_id: i32,
    pub week_start: NaiveDate,
    pub notes: String,
}

#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::time_blocks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TimeBlock {
    pub id: i32,
    pub schedule_week_id: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::time_blocks)]
pub struct NewTimeBlock {
    pub schedule_week_id: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Assignment {
    pub id: i32,
    pub time_block_id: i32,
    pub role_id: i32,
    pub day_of_week: i32,
    pub person_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::assignments)]
pub struct NewAssignment {
    pub time_block_id: i32,
    pub role_id: i32,
    pub day_of_week: i32,
    pub person_id: Option<i32>,
}

// Schedule grid payload, key names as the grid UI has always consumed them.

#[derive(Serialize)]
pub struct TimeRange {
    pub id: i32,
    pub start: String,
    pub end: String,
}

#[derive(Serialize)]
pub struct ScheduleRoleHolder {
    pub id: i32,
    pub position_id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub required_skill_ids: Vec<i32>,
}

#[derive(Serialize)]
pub struct AssignmentWithDetails {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub time_ranges: Vec<TimeRange>,
    pub role_holders: Vec<ScheduleRoleHolder>,
    pub assignments: Vec<AssignmentWithDetails>,
    pub notes: String,
    pub schedule_week_id: i32,
}

// API DTOs

#[derive(Deserialize)]
pub struct ScheduleQuery {
    #[serde(alias = "positionId")]
    pub position_id: Option<i32>,
    #[serde(alias = "weekStart")]
    pub week_start: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct CreateTimeRangeRequest {
    #[serde(alias = "position_id")]
    #[serde(rename = "positionId")]
    pub position_id: Option<i32>,
    #[serde(alias = "week_start")]
    #[serde(rename = "weekStart")]
    pub week_start: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTimeRangeRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAssignmentRequest {
    #[serde(alias = "position_id")]
    #[serde(rename = "positionId")]
    pub position_id: Option<i32>,
    #[serde(alias = "week_start")]
    #[serde(rename = "weekStart")]
    pub week_start: Option<NaiveDate>,
    #[serde(alias = "role_holder_id")]
    #[serde(rename = "roleHolderId")]
    pub role_holder_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(alias = "personnel_id")]
    #[serde(rename = "personnelId")]
    pub personnel_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateNotesRequest {
    #[serde(alias = "position_id")]
    #[serde(rename = "positionId")]
    pub position_id: Option<i32>,
    #[serde(alias = "week_start")]
    #[serde(rename = "weekStart")]
    pub week_start: Option<NaiveDate>,
    pub notes: Option<String>,
}
