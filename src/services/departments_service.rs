use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::models::department::{
        AvailablePerson, Department, DepartmentDetail, DepartmentMember, DepartmentWithStats,
        NewDepartment, UpsertDepartmentRequest,
    },
    db::repositories::departments::DepartmentsRepo,
    error::AppError,
    validation::department::validate_department,
};

pub struct DepartmentsService;

impl DepartmentsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<DepartmentWithStats>, AppError> {
        let departments = DepartmentsRepo::list(conn)?;

        let counts: HashMap<i32, i64> = DepartmentsRepo::member_counts(conn)?
            .into_iter()
            .filter_map(|(dept_id, count)| dept_id.map(|d| (d, count)))
            .collect();
        let commander_ids: Vec<i32> = departments.iter().filter_map(|d| d.commander_id).collect();
        let commander_names: HashMap<i32, String> =
            DepartmentsRepo::commander_names(conn, &commander_ids)?
                .into_iter()
                .collect();

        Ok(departments
            .into_iter()
            .map(|department| {
                let member_count = counts.get(&department.id).copied().unwrap_or(0);
                let commander_name = department
                    .commander_id
                    .and_then(|id| commander_names.get(&id).cloned());
                DepartmentWithStats {
                    department,
                    commander_name,
                    member_count,
                }
            })
            .collect())
    }

    pub fn get(conn: &mut PgConnection, dept_id: i32) -> Result<DepartmentDetail, AppError> {
        let department = DepartmentsRepo::find(conn, dept_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;
        let members = Self::members_of(conn, &department)?;

        let commander_info = members
            .iter()
            .find(|m| Some(m.id) == department.commander_id)
            .cloned();
        let soldiers: Vec<DepartmentMember> = members
            .iter()
            .filter(|m| Some(m.id) != department.commander_id)
            .cloned()
            .collect();
        let commander_name = commander_info.as_ref().map(|m| m.full_name.clone());

        Ok(DepartmentDetail {
            member_count: members.len() as i64,
            members,
            soldiers,
            commander_info,
            commander_name,
            department,
        })
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &UpsertDepartmentRequest,
    ) -> Result<Department, AppError> {
        let (name, commander_id) = validate_department(req)?;
        if DepartmentsRepo::exists_by_name_ci(conn, &name, None)? {
            return Err(AppError::conflict("Department name already exists"));
        }

        let soldier_ids = req.soldier_ids.clone().unwrap_or_default();
        let department = conn.transaction::<Department, diesel::result::Error, _>(|conn| {
            let new_department = NewDepartment {
                name: name.clone(),
                commander_id: Some(commander_id),
                notes: None,
            };
            let department = DepartmentsRepo::insert(conn, &new_department)?;
            DepartmentsRepo::assign_member(conn, commander_id, department.id, true)?;
            for soldier_id in soldier_ids.iter().filter(|&&id| id != commander_id) {
                DepartmentsRepo::assign_member(conn, *soldier_id, department.id, false)?;
            }
            Ok(department)
        })?;
        Ok(department)
    }

    /// Full membership replacement: members absent from the request are
    /// unassigned, the rest are (re)assigned with fresh commander flags.
    pub fn update(
        conn: &mut PgConnection,
        dept_id: i32,
        req: &UpsertDepartmentRequest,
    ) -> Result<(), AppError> {
        if DepartmentsRepo::find(conn, dept_id)?.is_none() {
            return Err(AppError::not_found("Department"));
        }
        let (name, commander_id) = validate_department(req)?;
        if DepartmentsRepo::exists_by_name_ci(conn, &name, Some(dept_id))? {
            return Err(AppError::conflict("Department name already exists"));
        }

        let mut desired: Vec<i32> = vec![commander_id];
        for soldier_id in req.soldier_ids.clone().unwrap_or_default() {
            if soldier_id != commander_id && !desired.contains(&soldier_id) {
                desired.push(soldier_id);
            }
        }

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            DepartmentsRepo::update(conn, dept_id, &name, commander_id)?;

            let current = DepartmentsRepo::member_ids(conn, dept_id)?;
            let removed: Vec<i32> = current
                .iter()
                .copied()
                .filter(|id| !desired.contains(id))
                .collect();
            if !removed.is_empty() {
                DepartmentsRepo::unassign_members(conn, &removed)?;
            }
            for member_id in &desired {
                DepartmentsRepo::assign_member(conn, *member_id, dept_id, *member_id == commander_id)?;
            }
            Ok(())
        })?;
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, dept_id: i32) -> Result<(), AppError> {
        if DepartmentsRepo::find(conn, dept_id)?.is_none() {
            return Err(AppError::not_found("Department"));
        }
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            DepartmentsRepo::unassign_all_members(conn, dept_id)?;
            DepartmentsRepo::delete(conn, dept_id)?;
            Ok(())
        })?;
        Ok(())
    }

    pub fn available_personnel(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<Vec<AvailablePerson>, AppError> {
        let roster = DepartmentsRepo::full_roster(conn)?;
        Ok(roster
            .into_iter()
            .map(
                |(id, full_name, rank, personal_number, department_id)| AvailablePerson {
                    id,
                    full_name,
                    rank,
                    personal_number,
                    is_current_member: department_id == Some(dept_id),
                },
            )
            .collect())
    }

    pub fn members(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<Vec<DepartmentMember>, AppError> {
        let department = DepartmentsRepo::find(conn, dept_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;
        Self::members_of(conn, &department)
    }

    pub fn assign_commander(
        conn: &mut PgConnection,
        dept_id: i32,
        person_id: Option<i32>,
    ) -> Result<(), AppError> {
        let person_id = person_id.ok_or_else(|| AppError::validation("Person ID is required"))?;
        if !DepartmentsRepo::person_in_department(conn, person_id, dept_id)? {
            return Err(AppError::conflict(
                "Person not found or not assigned to this department",
            ));
        }
        let updated = DepartmentsRepo::set_commander(conn, dept_id, Some(person_id))?;
        if updated == 0 {
            return Err(AppError::not_found("Department"));
        }
        Ok(())
    }

    pub fn remove_commander(conn: &mut PgConnection, dept_id: i32) -> Result<(), AppError> {
        let updated = DepartmentsRepo::set_commander(conn, dept_id, None)?;
        if updated == 0 {
            return Err(AppError::not_found("Department"));
        }
        Ok(())
    }

    /// The commander flag shown to clients comes from the department row,
    /// not from the personnel column.
    fn members_of(
        conn: &mut PgConnection,
        department: &Department,
    ) -> Result<Vec<DepartmentMember>, AppError> {
        let members = DepartmentsRepo::members(conn, department.id)?;
        Ok(members
            .into_iter()
            .map(|m| DepartmentMember {
                is_commander: Some(m.id) == department.commander_id,
                ..m
            })
            .collect())
    }
}
