use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::models::skill::{NewSkill, Skill, SkillWithCount, UpsertSkillRequest},
    db::repositories::skills::SkillsRepo,
    error::AppError,
};

pub struct SkillsService;

impl SkillsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<SkillWithCount>, AppError> {
        let skills = SkillsRepo::list(conn)?;
        let counts: HashMap<i32, i64> = SkillsRepo::certified_counts(conn)?.into_iter().collect();
        Ok(skills
            .into_iter()
            .map(|skill| SkillWithCount {
                qualified_count: counts.get(&skill.id).copied().unwrap_or(0),
                skill,
            })
            .collect())
    }

    pub fn get(conn: &mut PgConnection, skill_id: i32) -> Result<SkillWithCount, AppError> {
        let skill =
            SkillsRepo::find(conn, skill_id)?.ok_or_else(|| AppError::not_found("Skill"))?;
        let qualified_count = SkillsRepo::certified_count(conn, skill_id)?;
        Ok(SkillWithCount {
            skill,
            qualified_count,
        })
    }

    pub fn create(conn: &mut PgConnection, req: &UpsertSkillRequest) -> Result<Skill, AppError> {
        let name = Self::required_name(req)?;
        if SkillsRepo::exists_by_name_ci(conn, &name, None)? {
            return Err(AppError::conflict("Skill name already exists"));
        }
        let new_skill = NewSkill {
            name,
            notes: req.notes.clone(),
        };
        Ok(SkillsRepo::insert(conn, &new_skill)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        skill_id: i32,
        req: &UpsertSkillRequest,
    ) -> Result<(), AppError> {
        let name = Self::required_name(req)?;
        if SkillsRepo::exists_by_name_ci(conn, &name, Some(skill_id))? {
            return Err(AppError::conflict("Skill name already exists"));
        }
        let updated = SkillsRepo::update(conn, skill_id, &name, &req.notes)?;
        if updated == 0 {
            return Err(AppError::not_found("Skill"));
        }
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, skill_id: i32) -> Result<(), AppError> {
        let assigned = SkillsRepo::assigned_count(conn, skill_id)?;
        if assigned > 0 {
            return Err(AppError::dependents_exist(
                "Cannot delete skill - there are people with this skill",
                assigned,
            ));
        }
        let deleted = SkillsRepo::delete(conn, skill_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Skill"));
        }
        Ok(())
    }

    fn required_name(req: &UpsertSkillRequest) -> Result<String, AppError> {
        match req.name.as_deref() {
            Some(n) if !n.trim().is_empty() => Ok(n.trim().to_string()),
            _ => Err(AppError::validation("Skill name is required")),
        }
    }
}
