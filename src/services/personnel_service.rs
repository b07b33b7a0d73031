use diesel::prelude::*;

use crate::{
    db::enums::CertificationStatus,
    db::models::person::{
        BatchItemResult, BatchOutcome, NewPerson, Person, PersonWithRefs, PersonnelQuery,
        UpsertPersonRequest,
    },
    db::models::person_skill::NewPersonSkill,
    db::repositories::person_skills::PersonSkillsRepo,
    db::repositories::personnel::{PersonnelFilter, PersonnelRepo},
    error::AppError,
    validation::person::{validate_batch_ids, validate_person},
};

pub struct PersonnelService;

impl PersonnelService {
    pub fn list(
        conn: &mut PgConnection,
        query: &PersonnelQuery,
    ) -> Result<Vec<PersonWithRefs>, AppError> {
        let filter = PersonnelFilter {
            search: query.search.clone(),
            department_id: query.department_id,
            population_id: query.population_id,
            qualification_id: query.qualification_id,
        };
        let rows = PersonnelRepo::list(conn, &filter)?;
        Ok(rows
            .into_iter()
            .map(|(person, population_name, department_name)| PersonWithRefs {
                person,
                population_name,
                department_name,
            })
            .collect())
    }

    pub fn get(conn: &mut PgConnection, person_id: i32) -> Result<PersonWithRefs, AppError> {
        let (person, population_name, department_name) =
            PersonnelRepo::find_with_refs(conn, person_id)?
                .ok_or_else(|| AppError::not_found("Personnel"))?;
        Ok(PersonWithRefs {
            person,
            population_name,
            department_name,
        })
    }

    pub fn create(conn: &mut PgConnection, req: &UpsertPersonRequest) -> Result<Person, AppError> {
        validate_person(req)?;
        if PersonnelRepo::exists_by_personal_number(
            conn,
            req.personal_number.as_deref().unwrap_or_default(),
            None,
        )? {
            return Err(AppError::conflict("Personal number already exists"));
        }
        let record = Self::to_record(req);
        Ok(PersonnelRepo::insert(conn, &record)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        person_id: i32,
        req: &UpsertPersonRequest,
    ) -> Result<(), AppError> {
        validate_person(req)?;
        if PersonnelRepo::exists_by_personal_number(
            conn,
            req.personal_number.as_deref().unwrap_or_default(),
            Some(person_id),
        )? {
            return Err(AppError::conflict("Personal number already exists"));
        }
        let record = Self::to_record(req);
        let updated = PersonnelRepo::update(conn, person_id, &record)?;
        if updated == 0 {
            return Err(AppError::not_found("Personnel"));
        }
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, person_id: i32) -> Result<(), AppError> {
        let deleted = PersonnelRepo::delete(conn, person_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Personnel"));
        }
        Ok(())
    }

    /// Best-effort per-row update; a failed row is reported in the tally
    /// and does not stop the rest.
    pub fn batch_set_population(
        conn: &mut PgConnection,
        ids: &Option<Vec<i32>>,
        population_id: Option<i32>,
    ) -> Result<BatchOutcome, AppError> {
        let ids = validate_batch_ids(ids, "populationId", population_id.is_some())?;
        let target = population_id.unwrap_or_default();

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let item = match PersonnelRepo::set_population(conn, id, target) {
                Ok(0) => BatchItemResult {
                    id,
                    success: false,
                    error: Some("Personnel not found".to_string()),
                },
                Ok(_) => BatchItemResult {
                    id,
                    success: true,
                    error: None,
                },
                Err(e) => BatchItemResult {
                    id,
                    success: false,
                    error: Some(e.to_string()),
                },
            };
            results.push(item);
        }
        Ok(BatchOutcome::from_results(results))
    }

    pub fn batch_set_department(
        conn: &mut PgConnection,
        ids: &Option<Vec<i32>>,
        department_id: Option<i32>,
    ) -> Result<BatchOutcome, AppError> {
        let ids = validate_batch_ids(ids, "departmentId", department_id.is_some())?;
        let target = department_id.unwrap_or_default();

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let item = match PersonnelRepo::set_department(conn, id, target) {
                Ok(0) => BatchItemResult {
                    id,
                    success: false,
                    error: Some("Personnel not found".to_string()),
                },
                Ok(_) => BatchItemResult {
                    id,
                    success: true,
                    error: None,
                },
                Err(e) => BatchItemResult {
                    id,
                    success: false,
                    error: Some(e.to_string()),
                },
            };
            results.push(item);
        }
        Ok(BatchOutcome::from_results(results))
    }

    /// Grants each listed skill to each listed person. New grants start
    /// in-training; pairs the person already holds are left untouched.
    pub fn batch_assign_skills(
        conn: &mut PgConnection,
        ids: &Option<Vec<i32>>,
        skill_ids: &Option<Vec<i32>>,
    ) -> Result<BatchOutcome, AppError> {
        let skills_present = skill_ids.as_ref().map(|s| !s.is_empty()).unwrap_or(false);
        let ids = validate_batch_ids(ids, "skillIds", skills_present)?;
        let skill_ids = skill_ids.clone().unwrap_or_default();

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let item = match Self::assign_skills_to_person(conn, id, &skill_ids) {
                Ok(()) => BatchItemResult {
                    id,
                    success: true,
                    error: None,
                },
                Err(AppError::NotFound { .. }) => BatchItemResult {
                    id,
                    success: false,
                    error: Some("Personnel not found".to_string()),
                },
                Err(e) => BatchItemResult {
                    id,
                    success: false,
                    error: Some(e.to_string()),
                },
            };
            results.push(item);
        }
        Ok(BatchOutcome::from_results(results))
    }

    fn assign_skills_to_person(
        conn: &mut PgConnection,
        person_id: i32,
        skill_ids: &[i32],
    ) -> Result<(), AppError> {
        if !PersonnelRepo::exists(conn, person_id)? {
            return Err(AppError::not_found("Personnel"));
        }
        for &skill_id in skill_ids {
            if PersonSkillsRepo::exists_for_person_skill(conn, person_id, skill_id)? {
                continue;
            }
            let record = NewPersonSkill {
                person_id,
                skill_id,
                status: CertificationStatus::InTraining,
                training_start_date: None,
                training_end_date: None,
                expiry_date: None,
                notes: None,
            };
            PersonSkillsRepo::insert(conn, &record)?;
        }
        Ok(())
    }

    fn to_record(req: &UpsertPersonRequest) -> NewPerson {
        NewPerson {
            full_name: req.full_name.clone().unwrap_or_default(),
            personal_number: req.personal_number.clone().unwrap_or_default(),
            rank: req.rank.clone().unwrap_or_default(),
            branch: req.branch.clone().unwrap_or_default(),
            residence: req.residence.clone().unwrap_or_default(),
            phone: req.phone.clone().unwrap_or_default(),
            population_id: req.population_id,
            department_id: req.department_id,
            // Commander status is managed through the department endpoints.
            is_commander: false,
            id_number: req.id_number.clone().unwrap_or_default(),
            birth_date: req.birth_date.unwrap_or_default(),
            enlistment_date: req.enlistment_date.unwrap_or_default(),
            discharge_date: req.discharge_date.unwrap_or_default(),
            arrival_date: req.arrival_date,
            marital_status: req.marital_status.clone().unwrap_or_default(),
            course_cycle: req.course_cycle.clone().unwrap_or_default(),
            notes: req.notes.clone(),
        }
    }
}
