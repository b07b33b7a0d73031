use diesel::prelude::*;

use crate::db::enums::CertificationStatus;
use crate::db::models::person::{NewPerson, Person};

pub struct PersonnelRepo;

pub struct PersonnelFilter {
    pub search: Option<String>,
    pub department_id: Option<i32>,
    pub population_id: Option<i32>,
    pub qualification_id: Option<i32>,
}

impl PersonnelRepo {
    /// Roster listing with joined population/department names. The
    /// qualification filter keeps only people certified in that skill.
    pub fn list(
        conn: &mut PgConnection,
        filter: &PersonnelFilter,
    ) -> Result<Vec<(Person, Option<String>, Option<String>)>, diesel::result::Error> {
        use crate::schema::{departments, person_skills, personnel, populations};

        let mut query = personnel::table
            .left_join(populations::table)
            .left_join(departments::table)
            .select((
                Person::as_select(),
                populations::name.nullable(),
                departments::name.nullable(),
            ))
            .into_boxed();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search);
            query = query.filter(
                personnel::full_name
                    .like(pattern.clone())
                    .or(personnel::personal_number.like(pattern)),
            );
        }
        if let Some(dept_id) = filter.department_id {
            query = query.filter(personnel::department_id.eq(dept_id));
        }
        if let Some(pop_id) = filter.population_id {
            query = query.filter(personnel::population_id.eq(pop_id));
        }
        if let Some(qual_id) = filter.qualification_id {
            let certified = person_skills::table
                .filter(person_skills::skill_id.eq(qual_id))
                .filter(person_skills::status.eq(CertificationStatus::Certified))
                .select(person_skills::person_id);
            query = query.filter(personnel::id.eq_any(certified));
        }

        query.order(personnel::full_name.asc()).load(conn)
    }

    pub fn find_with_refs(
        conn: &mut PgConnection,
        person_id: i32,
    ) -> Result<Option<(Person, Option<String>, Option<String>)>, diesel::result::Error> {
        use crate::schema::{departments, personnel, populations};

        personnel::table
            .left_join(populations::table)
            .left_join(departments::table)
            .filter(personnel::id.eq(person_id))
            .select((
                Person::as_select(),
                populations::name.nullable(),
                departments::name.nullable(),
            ))
            .first(conn)
            .optional()
    }

    pub fn exists(conn: &mut PgConnection, person_id: i32) -> Result<bool, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::select(diesel::dsl::exists(personnel.filter(id.eq(person_id)))).get_result(conn)
    }

    pub fn exists_by_personal_number(
        conn: &mut PgConnection,
        number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                personnel
                    .filter(personal_number.eq(number))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                personnel.filter(personal_number.eq(number)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_person: &NewPerson,
    ) -> Result<Person, diesel::result::Error> {
        diesel::insert_into(crate::schema::personnel::table)
            .values(new_person)
            .get_result(conn)
    }

    /// Full-record replacement; absent optional fields are written back
    /// as NULL, as the roster's PUT has always behaved.
    pub fn update(
        conn: &mut PgConnection,
        person_id: i32,
        record: &NewPerson,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl as p;
        diesel::update(p::personnel.filter(p::id.eq(person_id)))
            .set((
                p::full_name.eq(&record.full_name),
                p::personal_number.eq(&record.personal_number),
                p::rank.eq(&record.rank),
                p::branch.eq(&record.branch),
                p::residence.eq(&record.residence),
                p::phone.eq(&record.phone),
                p::population_id.eq(record.population_id),
                p::department_id.eq(record.department_id),
                p::is_commander.eq(record.is_commander),
                p::id_number.eq(&record.id_number),
                p::birth_date.eq(record.birth_date),
                p::enlistment_date.eq(record.enlistment_date),
                p::discharge_date.eq(record.discharge_date),
                p::arrival_date.eq(record.arrival_date),
                p::marital_status.eq(&record.marital_status),
                p::course_cycle.eq(&record.course_cycle),
                p::notes.eq(&record.notes),
                p::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(conn: &mut PgConnection, person_id: i32) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::delete(personnel.filter(id.eq(person_id))).execute(conn)
    }

    pub fn set_population(
        conn: &mut PgConnection,
        person_id: i32,
        pop_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::update(personnel.filter(id.eq(person_id)))
            .set(population_id.eq(pop_id))
            .execute(conn)
    }

    pub fn set_department(
        conn: &mut PgConnection,
        person_id: i32,
        dept_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::update(personnel.filter(id.eq(person_id)))
            .set(department_id.eq(dept_id))
            .execute(conn)
    }
}
