use crate::db::enums::CertificationStatus;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::person_skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PersonSkill {
    pub id: i32,
    pub person_id: i32,
    pub skill_id: i32,
    pub status: CertificationStatus,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::person_skills)]
pub struct NewPersonSkill {
    pub person_id: i32,
    pub skill_id: i32,
    pub status: CertificationStatus,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct PersonSkillWithSkill {
    #[serde(flatten)]
    pub person_skill: PersonSkill,
    pub skill_name: String,
    pub skill_notes: Option<String>,
}

// API DTOs

#[derive(Deserialize)]
pub struct CreatePersonSkillRequest {
    pub skill_id: Option<i32>,
    pub status: Option<CertificationStatus>,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePersonSkillRequest {
    pub status: Option<CertificationStatus>,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
