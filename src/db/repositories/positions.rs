use diesel::prelude::*;

use crate::db::models::position::{NewPosition, NewRole, NewRoleSkill, Position, Role, RoleSkill};
use crate::db::repositories::lower;

pub struct PositionsRepo;

impl PositionsRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Position>, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        positions
            .select(Position::as_select())
            .order(name.asc())
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        position_id: i32,
    ) -> Result<Option<Position>, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        positions
            .filter(id.eq(position_id))
            .select(Position::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists(
        conn: &mut PgConnection,
        position_id: i32,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        diesel::select(diesel::dsl::exists(positions.filter(id.eq(position_id))))
            .get_result(conn)
    }

    pub fn exists_by_name_ci(
        conn: &mut PgConnection,
        position_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        let target = position_name.to_lowercase();
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                positions
                    .filter(lower(name).eq(target))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                positions.filter(lower(name).eq(target)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_position: &NewPosition,
    ) -> Result<Position, diesel::result::Error> {
        diesel::insert_into(crate::schema::positions::table)
            .values(new_position)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        position_id: i32,
        position_name: &str,
        position_notes: &Option<String>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        diesel::update(positions.filter(id.eq(position_id)))
            .set((
                name.eq(position_name),
                notes.eq(position_notes),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(
        conn: &mut PgConnection,
        position_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::positions::dsl::*;
        diesel::delete(positions.filter(id.eq(position_id))).execute(conn)
    }

    /// (position_id, role count) pairs for positions that have roles.
    pub fn role_counts(
        conn: &mut PgConnection,
    ) -> Result<Vec<(i32, i64)>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles
            .group_by(position_id)
            .select((position_id, diesel::dsl::count_star()))
            .load(conn)
    }

    pub fn role_count(
        conn: &mut PgConnection,
        position: i32,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles
            .filter(position_id.eq(position))
            .count()
            .get_result(conn)
    }
}

pub struct RolesRepo;

impl RolesRepo {
    pub fn list_for_position(
        conn: &mut PgConnection,
        position: i32,
    ) -> Result<Vec<Role>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles
            .filter(position_id.eq(position))
            .order(id.asc())
            .select(Role::as_select())
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        role_id: i32,
    ) -> Result<Option<Role>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles
            .filter(id.eq(role_id))
            .select(Role::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists_by_name_ci(
        conn: &mut PgConnection,
        position: i32,
        role_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        let target = role_name.to_lowercase();
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                roles
                    .filter(position_id.eq(position))
                    .filter(lower(name).eq(target))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                roles
                    .filter(position_id.eq(position))
                    .filter(lower(name).eq(target)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_role: &NewRole,
    ) -> Result<Role, diesel::result::Error> {
        diesel::insert_into(crate::schema::roles::table)
            .values(new_role)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        role_id: i32,
        role_name: &str,
        role_notes: &Option<String>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        diesel::update(roles.filter(id.eq(role_id)))
            .set((
                name.eq(role_name),
                notes.eq(role_notes),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(conn: &mut PgConnection, role_id: i32) -> Result<usize, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        diesel::delete(roles.filter(id.eq(role_id))).execute(conn)
    }

    /// Skill requirements for all roles of a position, joined with skill
    /// names, role id ascending.
    pub fn skills_for_position(
        conn: &mut PgConnection,
        position: i32,
    ) -> Result<Vec<(RoleSkill, String)>, diesel::result::Error> {
        use crate::schema::{role_skills, roles, skills};
        role_skills::table
            .inner_join(roles::table)
            .inner_join(skills::table)
            .filter(roles::position_id.eq(position))
            .order(role_skills::role_id.asc())
            .select((RoleSkill::as_select(), skills::name))
            .load(conn)
    }

    pub fn skills_for_role(
        conn: &mut PgConnection,
        role: i32,
    ) -> Result<Vec<(RoleSkill, String)>, diesel::result::Error> {
        use crate::schema::{role_skills, skills};
        role_skills::table
            .inner_join(skills::table)
            .filter(role_skills::role_id.eq(role))
            .select((RoleSkill::as_select(), skills::name))
            .load(conn)
    }

    pub fn delete_skills(
        conn: &mut PgConnection,
        role: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::role_skills::dsl::*;
        diesel::delete(role_skills.filter(role_id.eq(role))).execute(conn)
    }

    pub fn insert_skills(
        conn: &mut PgConnection,
        records: &[NewRoleSkill],
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(crate::schema::role_skills::table)
            .values(records)
            .execute(conn)
    }
}
