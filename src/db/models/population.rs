use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::populations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Population {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::populations)]
pub struct NewPopulation {
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct PopulationWithCount {
    #[serde(flatten)]
    pub population: Population,
    pub person_count: i64,
}

#[derive(Deserialize)]
pub struct UpsertPopulationRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
}
