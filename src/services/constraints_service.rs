use diesel::prelude::*;

use crate::{
    db::models::constraint::{
        Constraint, ConstraintQuery, ConstraintWithPerson, NewConstraint, UpsertConstraintRequest,
    },
    db::repositories::constraints::{ConstraintFilter, ConstraintsRepo},
    db::repositories::personnel::PersonnelRepo,
    error::AppError,
    validation::constraint::validate_constraint,
};

pub struct ConstraintsService;

impl ConstraintsService {
    pub fn list(
        conn: &mut PgConnection,
        query: &ConstraintQuery,
    ) -> Result<Vec<ConstraintWithPerson>, AppError> {
        let filter = ConstraintFilter {
            department_id: query.department_id,
            week_start: query.week_start,
        };
        let rows = ConstraintsRepo::list(conn, &filter)?;
        Ok(rows
            .into_iter()
            .map(|(constraint, full_name, rank)| ConstraintWithPerson {
                constraint,
                full_name,
                rank,
            })
            .collect())
    }

    pub fn get(
        conn: &mut PgConnection,
        constraint_id: i32,
    ) -> Result<ConstraintWithPerson, AppError> {
        let (constraint, full_name, rank) = ConstraintsRepo::find_with_person(conn, constraint_id)?
            .ok_or_else(|| AppError::not_found("Constraint"))?;
        Ok(ConstraintWithPerson {
            constraint,
            full_name,
            rank,
        })
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &UpsertConstraintRequest,
    ) -> Result<Constraint, AppError> {
        let valid = validate_constraint(req)?;
        if !PersonnelRepo::exists(conn, valid.person_id)? {
            return Err(AppError::conflict("Person not found"));
        }
        if ConstraintsRepo::exists_for_person_date(conn, valid.person_id, valid.date, None)? {
            return Err(AppError::conflict(
                "Constraint already exists for this person on this date",
            ));
        }
        let record = NewConstraint {
            person_id: valid.person_id,
            date: valid.date,
            kind: valid.kind,
            is_full_day: valid.is_full_day,
            start_time: valid.start_time,
            end_time: valid.end_time,
            description: req.description.clone(),
        };
        Ok(ConstraintsRepo::insert(conn, &record)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        constraint_id: i32,
        req: &UpsertConstraintRequest,
    ) -> Result<(), AppError> {
        if ConstraintsRepo::find(conn, constraint_id)?.is_none() {
            return Err(AppError::not_found("Constraint"));
        }
        let valid = validate_constraint(req)?;
        if ConstraintsRepo::exists_for_person_date(
            conn,
            valid.person_id,
            valid.date,
            Some(constraint_id),
        )? {
            return Err(AppError::conflict(
                "Another constraint already exists for this person on this date",
            ));
        }
        let record = NewConstraint {
            person_id: valid.person_id,
            date: valid.date,
            kind: valid.kind,
            is_full_day: valid.is_full_day,
            start_time: valid.start_time,
            end_time: valid.end_time,
            description: req.description.clone(),
        };
        ConstraintsRepo::update(conn, constraint_id, &record)?;
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, constraint_id: i32) -> Result<(), AppError> {
        let deleted = ConstraintsRepo::delete(conn, constraint_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Constraint"));
        }
        Ok(())
    }
}
