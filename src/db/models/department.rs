use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub commander_id: Option<i32>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment {
    pub name: String,
    pub commander_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct DepartmentWithStats {
    #[serde(flatten)]
    pub department: Department,
    pub commander_name: Option<String>,
    pub member_count: i64,
}

#[derive(Queryable, Serialize, Clone)]
pub struct DepartmentMember {
    pub id: i32,
    pub full_name: String,
    pub rank: String,
    pub personal_number: String,
    pub is_commander: bool,
}

#[derive(Serialize)]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    pub commander_name: Option<String>,
    pub member_count: i64,
    pub members: Vec<DepartmentMember>,
    pub soldiers: Vec<DepartmentMember>,
    pub commander_info: Option<DepartmentMember>,
}

#[derive(Serialize)]
pub struct AvailablePerson {
    pub id: i32,
    pub full_name: String,
    pub rank: String,
    pub personal_number: String,
    pub is_current_member: bool,
}

// API DTOs

#[derive(Deserialize)]
pub struct UpsertDepartmentRequest {
    pub name: Option<String>,
    #[serde(alias = "commanderId")]
    pub commander_id: Option<i32>,
    #[serde(alias = "soldierIds")]
    pub soldier_ids: Option<Vec<i32>>,
}

#[derive(Deserialize)]
pub struct AssignCommanderRequest {
    pub person_id: Option<i32>,
}
