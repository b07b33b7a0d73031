use diesel::prelude::*;

use crate::db::models::population::{NewPopulation, Population};
use crate::db::repositories::lower;

pub struct PopulationsRepo;

impl PopulationsRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Population>, diesel::result::Error> {
        use crate::schema::populations::dsl::*;
        populations
            .select(Population::as_select())
            .order(name.asc())
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        pop_id: i32,
    ) -> Result<Option<Population>, diesel::result::Error> {
        use crate::schema::populations::dsl::*;
        populations
            .filter(id.eq(pop_id))
            .select(Population::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists_by_name_ci(
        conn: &mut PgConnection,
        pop_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::populations::dsl::*;
        let target = pop_name.to_lowercase();
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                populations
                    .filter(lower(name).eq(target))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                populations.filter(lower(name).eq(target)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_population: &NewPopulation,
    ) -> Result<Population, diesel::result::Error> {
        diesel::insert_into(crate::schema::populations::table)
            .values(new_population)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        pop_id: i32,
        pop_name: &str,
        pop_notes: &Option<String>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::populations::dsl::*;
        diesel::update(populations.filter(id.eq(pop_id)))
            .set((
                name.eq(pop_name),
                notes.eq(pop_notes),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(conn: &mut PgConnection, pop_id: i32) -> Result<usize, diesel::result::Error> {
        use crate::schema::populations::dsl::*;
        diesel::delete(populations.filter(id.eq(pop_id))).execute(conn)
    }

    pub fn person_counts(
        conn: &mut PgConnection,
    ) -> Result<Vec<(Option<i32>, i64)>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(population_id.is_not_null())
            .group_by(population_id)
            .select((population_id, diesel::dsl::count_star()))
            .load(conn)
    }

    pub fn person_count(
        conn: &mut PgConnection,
        pop_id: i32,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(population_id.eq(pop_id))
            .count()
            .get_result(conn)
    }
}
