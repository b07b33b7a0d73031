use diesel::prelude::*;

use crate::db::enums::CertificationStatus;
use crate::db::models::skill::{NewSkill, Skill};
use crate::db::repositories::lower;

pub struct SkillsRepo;

impl SkillsRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Skill>, diesel::result::Error> {
        use crate::schema::skills::dsl::*;
        skills
            .select(Skill::as_select())
            .order(name.asc())
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        skill_id: i32,
    ) -> Result<Option<Skill>, diesel::result::Error> {
        use crate::schema::skills::dsl::*;
        skills
            .filter(id.eq(skill_id))
            .select(Skill::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists_by_name_ci(
        conn: &mut PgConnection,
        skill_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::skills::dsl::*;
        let target = skill_name.to_lowercase();
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                skills
                    .filter(lower(name).eq(target))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => {
                diesel::select(diesel::dsl::exists(skills.filter(lower(name).eq(target))))
                    .get_result(conn)
            }
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_skill: &NewSkill,
    ) -> Result<Skill, diesel::result::Error> {
        diesel::insert_into(crate::schema::skills::table)
            .values(new_skill)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        skill_id: i32,
        skill_name: &str,
        skill_notes: &Option<String>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::skills::dsl::*;
        diesel::update(skills.filter(id.eq(skill_id)))
            .set((
                name.eq(skill_name),
                notes.eq(skill_notes),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(conn: &mut PgConnection, skill_id: i32) -> Result<usize, diesel::result::Error> {
        use crate::schema::skills::dsl::*;
        diesel::delete(skills.filter(id.eq(skill_id))).execute(conn)
    }

    /// (skill_id, certified people) pairs; skills nobody is certified in
    /// are absent.
    pub fn certified_counts(
        conn: &mut PgConnection,
    ) -> Result<Vec<(i32, i64)>, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        person_skills
            .filter(status.eq(CertificationStatus::Certified))
            .group_by(skill_id)
            .select((skill_id, diesel::dsl::count_star()))
            .load(conn)
    }

    pub fn certified_count(
        conn: &mut PgConnection,
        skill: i32,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        person_skills
            .filter(skill_id.eq(skill))
            .filter(status.eq(CertificationStatus::Certified))
            .count()
            .get_result(conn)
    }

    /// Every person-skill row referencing the skill, certified or not;
    /// this is what blocks deletion.
    pub fn assigned_count(
        conn: &mut PgConnection,
        skill: i32,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::person_skills::dsl::*;
        person_skills
            .filter(skill_id.eq(skill))
            .count()
            .get_result(conn)
    }
}
