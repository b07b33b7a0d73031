use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::models::population::{
        NewPopulation, Population, PopulationWithCount, UpsertPopulationRequest,
    },
    db::repositories::populations::PopulationsRepo,
    error::AppError,
};

pub struct PopulationsService;

impl PopulationsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<PopulationWithCount>, AppError> {
        let populations = PopulationsRepo::list(conn)?;
        let counts: HashMap<i32, i64> = PopulationsRepo::person_counts(conn)?
            .into_iter()
            .filter_map(|(pop_id, count)| pop_id.map(|p| (p, count)))
            .collect();
        Ok(populations
            .into_iter()
            .map(|population| PopulationWithCount {
                person_count: counts.get(&population.id).copied().unwrap_or(0),
                population,
            })
            .collect())
    }

    pub fn get(conn: &mut PgConnection, pop_id: i32) -> Result<PopulationWithCount, AppError> {
        let population = PopulationsRepo::find(conn, pop_id)?
            .ok_or_else(|| AppError::not_found("Population"))?;
        let person_count = PopulationsRepo::person_count(conn, pop_id)?;
        Ok(PopulationWithCount {
            population,
            person_count,
        })
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &UpsertPopulationRequest,
    ) -> Result<Population, AppError> {
        let name = Self::required_name(req)?;
        if PopulationsRepo::exists_by_name_ci(conn, &name, None)? {
            return Err(AppError::conflict("Population name already exists"));
        }
        let new_population = NewPopulation {
            name,
            notes: req.notes.clone(),
        };
        Ok(PopulationsRepo::insert(conn, &new_population)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        pop_id: i32,
        req: &UpsertPopulationRequest,
    ) -> Result<(), AppError> {
        let name = Self::required_name(req)?;
        if PopulationsRepo::exists_by_name_ci(conn, &name, Some(pop_id))? {
            return Err(AppError::conflict("Population name already exists"));
        }
        let updated = PopulationsRepo::update(conn, pop_id, &name, &req.notes)?;
        if updated == 0 {
            return Err(AppError::not_found("Population"));
        }
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, pop_id: i32) -> Result<(), AppError> {
        let assigned = PopulationsRepo::person_count(conn, pop_id)?;
        if assigned > 0 {
            return Err(AppError::dependents_exist(
                "Cannot delete population - there are people assigned to it",
                assigned,
            ));
        }
        let deleted = PopulationsRepo::delete(conn, pop_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Population"));
        }
        Ok(())
    }

    fn required_name(req: &UpsertPopulationRequest) -> Result<String, AppError> {
        match req.name.as_deref() {
            Some(n) if !n.trim().is_empty() => Ok(n.trim().to_string()),
            _ => Err(AppError::validation("Population name is required")),
        }
    }
}
