use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::enums::CertificationStatus;
use crate::db::models::person_skill::{NewPersonSkill, PersonSkill};

pub struct PersonSkillsRepo;

impl PersonSkillsRepo {
    pub fn list_for_person(
        conn: &mut PgConnection,
        person: i32,
    ) -> Result<Vec<(PersonSkill, String, Option<String>)>, diesel::result::Error> {
        use crate::schema::{person_skills, skills};
        person_skills::table
            .inner_join(skills::table)
            .filter(person_skills::person_id.eq(person))
            .order(skills::name.asc())
            .select((
                PersonSkill::as_select(),
                skills::name,
                skills::notes,
            ))
            .load(conn)
    }

    pub fn exists_for_person_skill(
        conn: &mut PgConnection,
        person: i32,
        skill: i32,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        diesel::select(diesel::dsl::exists(
            person_skills
                .filter(person_id.eq(person))
                .filter(skill_id.eq(skill)),
        ))
        .get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_record: &NewPersonSkill,
    ) -> Result<PersonSkill, diesel::result::Error> {
        diesel::insert_into(crate::schema::person_skills::table)
            .values(new_record)
            .get_result(conn)
    }

    /// Updates are addressed by (person, skill), the way the API paths
    /// identify an assignment.
    pub fn update(
        conn: &mut PgConnection,
        person: i32,
        skill: i32,
        new_status: CertificationStatus,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        expiry: Option<NaiveDate>,
        new_notes: &Option<String>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        diesel::update(
            person_skills
                .filter(person_id.eq(person))
                .filter(skill_id.eq(skill)),
        )
        .set((
            status.eq(new_status),
            training_start_date.eq(start),
            training_end_date.eq(end),
            expiry_date.eq(expiry),
            notes.eq(new_notes),
            updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)
    }

    pub fn delete(
        conn: &mut PgConnection,
        person: i32,
        skill: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        diesel::delete(
            person_skills
                .filter(person_id.eq(person))
                .filter(skill_id.eq(skill)),
        )
        .execute(conn)
    }
}
