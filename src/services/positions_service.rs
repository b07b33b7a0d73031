use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::models::position::{
        NewPosition, NewRole, NewRoleSkill, Position, PositionDetail, PositionWithCount, Role,
        RoleHolder, RoleWithSkills, UpsertPositionRequest, UpsertRoleRequest,
    },
    db::repositories::positions::{PositionsRepo, RolesRepo},
    error::AppError,
    validation::position::{ValidRoleHolder, validate_position, validate_role},
};

pub struct PositionsService;

impl PositionsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<PositionWithCount>, AppError> {
        let positions = PositionsRepo::list(conn)?;
        let counts: HashMap<i32, i64> = PositionsRepo::role_counts(conn)?.into_iter().collect();
        Ok(positions
            .into_iter()
            .map(|position| PositionWithCount {
                role_count: counts.get(&position.id).copied().unwrap_or(0),
                position,
            })
            .collect())
    }

    pub fn get(conn: &mut PgConnection, position_id: i32) -> Result<PositionDetail, AppError> {
        let position = PositionsRepo::find(conn, position_id)?
            .ok_or_else(|| AppError::not_found("Position"))?;
        let roles = RolesRepo::list_for_position(conn, position_id)?;
        let skills = RolesRepo::skills_for_position(conn, position_id)?;

        let mut by_role: HashMap<i32, (Vec<i32>, Vec<String>)> = HashMap::new();
        for (role_skill, skill_name) in skills {
            let entry = by_role.entry(role_skill.role_id).or_default();
            entry.0.push(role_skill.skill_id);
            entry.1.push(skill_name);
        }

        let role_holders: Vec<RoleHolder> = roles
            .into_iter()
            .map(|role| {
                let (qualification_ids, qualification_names) =
                    by_role.remove(&role.id).unwrap_or_default();
                RoleHolder {
                    id: role.id,
                    name: role.name,
                    notes: role.notes,
                    qualification_ids,
                    qualification_names,
                }
            })
            .collect();

        Ok(PositionDetail {
            role_count: role_holders.len() as i64,
            role_holders,
            position,
        })
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &UpsertPositionRequest,
    ) -> Result<Position, AppError> {
        let (name, holders) = validate_position(req)?;
        if PositionsRepo::exists_by_name_ci(conn, &name, None)? {
            return Err(AppError::conflict("Position name already exists"));
        }

        let notes = req.notes.clone();
        let position = conn.transaction::<Position, diesel::result::Error, _>(|conn| {
            let new_position = NewPosition {
                name: name.clone(),
                notes: notes.clone(),
            };
            let position = PositionsRepo::insert(conn, &new_position)?;
            for holder in &holders {
                Self::insert_role_with_skills(conn, position.id, holder)?;
            }
            Ok(position)
        })?;
        Ok(position)
    }

    /// Role set is replaced by name: roles kept in the request keep their
    /// ids, removed ones are deleted (assignments cascade), new ones are
    /// inserted. Skill requirements are rebuilt for every kept role.
    pub fn update(
        conn: &mut PgConnection,
        position_id: i32,
        req: &UpsertPositionRequest,
    ) -> Result<(String, usize), AppError> {
        if PositionsRepo::find(conn, position_id)?.is_none() {
            return Err(AppError::not_found("Position"));
        }
        let (name, holders) = validate_position(req)?;
        if PositionsRepo::exists_by_name_ci(conn, &name, Some(position_id))? {
            return Err(AppError::conflict("Position name already exists"));
        }

        let notes = req.notes.clone();
        let holder_count = holders.len();
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            PositionsRepo::update(conn, position_id, &name, &notes)?;

            let existing = RolesRepo::list_for_position(conn, position_id)?;
            let mut remaining: HashMap<String, Role> = existing
                .into_iter()
                .map(|role| (role.name.clone(), role))
                .collect();

            for holder in &holders {
                match remaining.remove(&holder.name) {
                    Some(role) => {
                        RolesRepo::update(conn, role.id, &holder.name, &role.notes)?;
                        RolesRepo::delete_skills(conn, role.id)?;
                        Self::insert_skills(conn, role.id, holder)?;
                    }
                    None => {
                        Self::insert_role_with_skills(conn, position_id, holder)?;
                    }
                }
            }
            for (_, removed) in remaining {
                RolesRepo::delete(conn, removed.id)?;
            }
            Ok(())
        })?;
        Ok((name, holder_count))
    }

    pub fn delete(conn: &mut PgConnection, position_id: i32) -> Result<(), AppError> {
        let role_count = PositionsRepo::role_count(conn, position_id)?;
        if role_count > 0 {
            return Err(AppError::dependents_exist(
                "Cannot delete position - there are role-holders assigned to it",
                role_count,
            ));
        }
        let deleted = PositionsRepo::delete(conn, position_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Position"));
        }
        Ok(())
    }

    pub fn roles(
        conn: &mut PgConnection,
        position_id: i32,
    ) -> Result<Vec<RoleWithSkills>, AppError> {
        let roles = RolesRepo::list_for_position(conn, position_id)?;
        let skills = RolesRepo::skills_for_position(conn, position_id)?;

        let mut by_role: HashMap<i32, (Vec<String>, Vec<i32>, Vec<bool>)> = HashMap::new();
        for (role_skill, skill_name) in skills {
            let entry = by_role.entry(role_skill.role_id).or_default();
            entry.0.push(skill_name);
            entry.1.push(role_skill.skill_id);
            entry.2.push(role_skill.is_mandatory);
        }

        Ok(roles
            .into_iter()
            .map(|role| {
                let (required_skills, skill_ids, skill_mandatory) =
                    by_role.remove(&role.id).unwrap_or_default();
                RoleWithSkills {
                    role,
                    required_skills,
                    skill_ids,
                    skill_mandatory,
                }
            })
            .collect())
    }

    pub fn create_role(
        conn: &mut PgConnection,
        position_id: i32,
        req: &UpsertRoleRequest,
    ) -> Result<Role, AppError> {
        let name = validate_role(&req.name, &req.required_skills)?;
        if RolesRepo::exists_by_name_ci(conn, position_id, &name, None)? {
            return Err(AppError::conflict("Role name already exists in this position"));
        }

        let notes = req.notes.clone();
        let required = req.required_skills.clone().unwrap_or_default();
        let role = conn.transaction::<Role, diesel::result::Error, _>(|conn| {
            let new_role = NewRole {
                position_id,
                name: name.clone(),
                notes: notes.clone(),
            };
            let role = RolesRepo::insert(conn, &new_role)?;
            let records: Vec<NewRoleSkill> = required
                .iter()
                .map(|s| NewRoleSkill {
                    role_id: role.id,
                    skill_id: s.skill_id,
                    is_mandatory: s.is_mandatory,
                })
                .collect();
            RolesRepo::insert_skills(conn, &records)?;
            Ok(role)
        })?;
        Ok(role)
    }

    pub fn update_role(
        conn: &mut PgConnection,
        position_id: i32,
        role_id: i32,
        req: &UpsertRoleRequest,
    ) -> Result<(), AppError> {
        let name = validate_role(&req.name, &req.required_skills)?;
        if RolesRepo::exists_by_name_ci(conn, position_id, &name, Some(role_id))? {
            return Err(AppError::conflict("Role name already exists in this position"));
        }
        if RolesRepo::find(conn, role_id)?.is_none() {
            return Err(AppError::not_found("Role"));
        }

        let notes = req.notes.clone();
        let required = req.required_skills.clone().unwrap_or_default();
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            RolesRepo::update(conn, role_id, &name, &notes)?;
            RolesRepo::delete_skills(conn, role_id)?;
            let records: Vec<NewRoleSkill> = required
                .iter()
                .map(|s| NewRoleSkill {
                    role_id,
                    skill_id: s.skill_id,
                    is_mandatory: s.is_mandatory,
                })
                .collect();
            RolesRepo::insert_skills(conn, &records)?;
            Ok(())
        })?;
        Ok(())
    }

    pub fn delete_role(conn: &mut PgConnection, role_id: i32) -> Result<(), AppError> {
        let deleted = RolesRepo::delete(conn, role_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Role"));
        }
        Ok(())
    }

    fn insert_role_with_skills(
        conn: &mut PgConnection,
        position_id: i32,
        holder: &ValidRoleHolder,
    ) -> Result<(), diesel::result::Error> {
        let new_role = NewRole {
            position_id,
            name: holder.name.clone(),
            notes: None,
        };
        let role = RolesRepo::insert(conn, &new_role)?;
        Self::insert_skills(conn, role.id, holder)
    }

    /// Position-level role holders carry mandatory qualifications only.
    fn insert_skills(
        conn: &mut PgConnection,
        role_id: i32,
        holder: &ValidRoleHolder,
    ) -> Result<(), diesel::result::Error> {
        let records: Vec<NewRoleSkill> = holder
            .qualification_ids
            .iter()
            .map(|&skill_id| NewRoleSkill {
                role_id,
                skill_id,
                is_mandatory: true,
            })
            .collect();
        RolesRepo::insert_skills(conn, &records)?;
        Ok(())
    }
}
