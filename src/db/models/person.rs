use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::personnel)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Person {
    pub id: i32,
    pub full_name: String,
    pub personal_number: String,
    pub rank: String,
    pub branch: String,
    pub residence: String,
    pub phone: String,
    pub population_id: Option<i32>,
    pub department_id: Option<i32>,
    pub is_commander: bool,
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub enlistment_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub arrival_date: Option<NaiveDate>,
    pub marital_status: String,
    pub course_cycle: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::personnel)]
pub struct NewPerson {
    pub full_name: String,
    pub personal_number: String,
    pub rank: String,
    pub branch: String,
    pub residence: String,
    pub phone: String,
    pub population_id: Option<i32>,
    pub department_id: Option<i32>,
    pub is_commander: bool,
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub enlistment_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub arrival_date: Option<NaiveDate>,
    pub marital_status: String,
    pub course_cycle: String,
    pub notes: Option<String>,
}

/// Roster row with the joined population/department names the list and
/// detail endpoints return.
#[derive(Serialize)]
pub struct PersonWithRefs {
    #[serde(flatten)]
    pub person: Person,
    pub population_name: Option<String>,
    pub department_name: Option<String>,
}

// API DTOs

#[derive(Deserialize)]
pub struct PersonnelQuery {
    pub search: Option<String>,
    #[serde(alias = "departmentId")]
    pub department_id: Option<i32>,
    #[serde(alias = "populationId")]
    pub population_id: Option<i32>,
    #[serde(alias = "qualificationId")]
    pub qualification_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpsertPersonRequest {
    pub full_name: Option<String>,
    pub personal_number: Option<String>,
    pub rank: Option<String>,
    pub branch: Option<String>,
    pub residence: Option<String>,
    pub phone: Option<String>,
    pub population_id: Option<i32>,
    pub department_id: Option<i32>,
    pub id_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enlistment_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub marital_status: Option<String>,
    pub course_cycle: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct BatchPopulationRequest {
    pub ids: Option<Vec<i32>>,
    #[serde(alias = "population_id")]
    #[serde(rename = "populationId")]
    pub population_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct BatchDepartmentRequest {
    pub ids: Option<Vec<i32>>,
    #[serde(alias = "department_id")]
    #[serde(rename = "departmentId")]
    pub department_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct BatchSkillsRequest {
    pub ids: Option<Vec<i32>>,
    #[serde(alias = "skill_ids")]
    #[serde(rename = "skillIds")]
    pub skill_ids: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct BatchItemResult {
    pub id: i32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-item tally of a best-effort batch write. Rows that failed stay
/// failed; nothing is rolled back.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub message: String,
    pub results: Vec<BatchItemResult>,
    pub success_count: usize,
    pub error_count: usize,
}

impl BatchOutcome {
    pub fn from_results(results: Vec<BatchItemResult>) -> Self {
        let success_count = results.iter().filter(|r| r.success).count();
        let error_count = results.len() - success_count;
        Self {
            message: "Batch operation completed".to_string(),
            results,
            success_count,
            error_count,
        }
    }
}
