use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::skills)]
pub struct NewSkill {
    pub name: String,
    pub notes: Option<String>,
}

/// Skill with the number of people currently certified in it.
#[derive(Serialize)]
pub struct SkillWithCount {
    #[serde(flatten)]
    pub skill: Skill,
    pub qualified_count: i64,
}

#[derive(Deserialize)]
pub struct UpsertSkillRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
}
