use diesel::prelude::*;

use crate::{
    db::models::person_skill::{
        CreatePersonSkillRequest, NewPersonSkill, PersonSkill, PersonSkillWithSkill,
        UpdatePersonSkillRequest,
    },
    db::repositories::person_skills::PersonSkillsRepo,
    error::AppError,
};

pub struct PersonSkillsService;

impl PersonSkillsService {
    pub fn list_for_person(
        conn: &mut PgConnection,
        person_id: i32,
    ) -> Result<Vec<PersonSkillWithSkill>, AppError> {
        let rows = PersonSkillsRepo::list_for_person(conn, person_id)?;
        Ok(rows
            .into_iter()
            .map(|(person_skill, skill_name, skill_notes)| PersonSkillWithSkill {
                person_skill,
                skill_name,
                skill_notes,
            })
            .collect())
    }

    pub fn create(
        conn: &mut PgConnection,
        person_id: i32,
        req: &CreatePersonSkillRequest,
    ) -> Result<PersonSkill, AppError> {
        let (skill_id, status) = match (req.skill_id, req.status) {
            (Some(skill_id), Some(status)) => (skill_id, status),
            _ => return Err(AppError::validation("Skill ID and status are required")),
        };
        if PersonSkillsRepo::exists_for_person_skill(conn, person_id, skill_id)? {
            return Err(AppError::conflict("Person already has this skill assigned"));
        }
        let record = NewPersonSkill {
            person_id,
            skill_id,
            status,
            training_start_date: req.training_start_date,
            training_end_date: req.training_end_date,
            expiry_date: req.expiry_date,
            notes: req.notes.clone(),
        };
        Ok(PersonSkillsRepo::insert(conn, &record)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        person_id: i32,
        skill_id: i32,
        req: &UpdatePersonSkillRequest,
    ) -> Result<(), AppError> {
        let status = req
            .status
            .ok_or_else(|| AppError::validation("Status is required"))?;
        let updated = PersonSkillsRepo::update(
            conn,
            person_id,
            skill_id,
            status,
            req.training_start_date,
            req.training_end_date,
            req.expiry_date,
            &req.notes,
        )?;
        if updated == 0 {
            return Err(AppError::not_found("Person skill assignment"));
        }
        Ok(())
    }

    pub fn delete(
        conn: &mut PgConnection,
        person_id: i32,
        skill_id: i32,
    ) -> Result<(), AppError> {
        let deleted = PersonSkillsRepo::delete(conn, person_id, skill_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Person skill assignment"));
        }
        Ok(())
    }
}
