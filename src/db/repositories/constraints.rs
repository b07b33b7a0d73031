use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::models::constraint::{Constraint, NewConstraint};

pub struct ConstraintsRepo;

pub struct ConstraintFilter {
    pub department_id: Option<i32>,
    /// Sunday of the wanted week; filters to [week_start, week_start + 7).
    pub week_start: Option<NaiveDate>,
}

impl ConstraintsRepo {
    pub fn list(
        conn: &mut PgConnection,
        filter: &ConstraintFilter,
    ) -> Result<Vec<(Constraint, String, String)>, diesel::result::Error> {
        use crate::schema::{constraints, personnel};

        let mut query = constraints::table
            .inner_join(personnel::table)
            .select((Constraint::as_select(), personnel::full_name, personnel::rank))
            .into_boxed();

        if let Some(dept_id) = filter.department_id {
            query = query.filter(personnel::department_id.eq(dept_id));
        }
        if let Some(week) = filter.week_start {
            query = query
                .filter(constraints::date.ge(week))
                .filter(constraints::date.lt(week + chrono::Duration::days(7)));
        }

        query
            .order((constraints::date.asc(), personnel::full_name.asc()))
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        constraint_id: i32,
    ) -> Result<Option<Constraint>, diesel::result::Error> {
        use crate::schema::constraints::dsl::*;
        constraints
            .filter(id.eq(constraint_id))
            .select(Constraint::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_with_person(
        conn: &mut PgConnection,
        constraint_id: i32,
    ) -> Result<Option<(Constraint, String, String)>, diesel::result::Error> {
        use crate::schema::{constraints, personnel};
        constraints::table
            .inner_join(personnel::table)
            .filter(constraints::id.eq(constraint_id))
            .select((Constraint::as_select(), personnel::full_name, personnel::rank))
            .first(conn)
            .optional()
    }

    pub fn exists_for_person_date(
        conn: &mut PgConnection,
        person: i32,
        day: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::constraints::dsl::*;
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                constraints
                    .filter(person_id.eq(person))
                    .filter(date.eq(day))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                constraints.filter(person_id.eq(person)).filter(date.eq(day)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_constraint: &NewConstraint,
    ) -> Result<Constraint, diesel::result::Error> {
        diesel::insert_into(crate::schema::constraints::table)
            .values(new_constraint)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        constraint_id: i32,
        record: &NewConstraint,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::constraints::dsl as c;
        diesel::update(c::constraints.filter(c::id.eq(constraint_id)))
            .set((
                c::person_id.eq(record.person_id),
                c::date.eq(record.date),
                c::kind.eq(record.kind),
                c::is_full_day.eq(record.is_full_day),
                c::start_time.eq(&record.start_time),
                c::end_time.eq(&record.end_time),
                c::description.eq(&record.description),
                c::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(
        conn: &mut PgConnection,
        constraint_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::constraints::dsl::*;
        diesel::delete(constraints.filter(id.eq(constraint_id))).execute(conn)
    }
}
