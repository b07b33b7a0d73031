use diesel::prelude::*;

use crate::db::models::department::{Department, DepartmentMember, NewDepartment};
use crate::db::repositories::lower;

pub struct DepartmentsRepo;

impl DepartmentsRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments
            .select(Department::as_select())
            .order(name.asc())
            .load(conn)
    }

    pub fn find(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<Option<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments
            .filter(id.eq(dept_id))
            .select(Department::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists_by_name_ci(
        conn: &mut PgConnection,
        dept_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        let target = dept_name.to_lowercase();
        match exclude_id {
            Some(excluded) => diesel::select(diesel::dsl::exists(
                departments
                    .filter(lower(name).eq(target))
                    .filter(id.ne(excluded)),
            ))
            .get_result(conn),
            None => diesel::select(diesel::dsl::exists(
                departments.filter(lower(name).eq(target)),
            ))
            .get_result(conn),
        }
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_department: &NewDepartment,
    ) -> Result<Department, diesel::result::Error> {
        diesel::insert_into(crate::schema::departments::table)
            .values(new_department)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        dept_id: i32,
        dept_name: &str,
        commander: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::update(departments.filter(id.eq(dept_id)))
            .set((
                name.eq(dept_name),
                commander_id.eq(commander),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
    }

    pub fn delete(conn: &mut PgConnection, dept_id: i32) -> Result<usize, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::delete(departments.filter(id.eq(dept_id))).execute(conn)
    }

    pub fn set_commander(
        conn: &mut PgConnection,
        dept_id: i32,
        commander: Option<i32>,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::update(departments.filter(id.eq(dept_id)))
            .set((commander_id.eq(commander), updated_at.eq(diesel::dsl::now)))
            .execute(conn)
    }

    /// (department_id, member count) pairs for every department that has
    /// at least one member.
    pub fn member_counts(
        conn: &mut PgConnection,
    ) -> Result<Vec<(Option<i32>, i64)>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(department_id.is_not_null())
            .group_by(department_id)
            .select((department_id, diesel::dsl::count_star()))
            .load(conn)
    }

    pub fn commander_names(
        conn: &mut PgConnection,
        ids: &[i32],
    ) -> Result<Vec<(i32, String)>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(id.eq_any(ids.to_vec()))
            .select((id, full_name))
            .load(conn)
    }

    pub fn members(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<Vec<DepartmentMember>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(department_id.eq(dept_id))
            .order((is_commander.desc(), full_name.asc()))
            .select((id, full_name, rank, personal_number, is_commander))
            .load(conn)
    }

    pub fn member_ids(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<Vec<i32>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .filter(department_id.eq(dept_id))
            .select(id)
            .load(conn)
    }

    pub fn person_in_department(
        conn: &mut PgConnection,
        person: i32,
        dept_id: i32,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::select(diesel::dsl::exists(
            personnel
                .filter(id.eq(person))
                .filter(department_id.eq(dept_id)),
        ))
        .get_result(conn)
    }

    pub fn unassign_members(
        conn: &mut PgConnection,
        ids: &[i32],
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::update(personnel.filter(id.eq_any(ids.to_vec())))
            .set((
                department_id.eq(None::<i32>),
                is_commander.eq(false),
            ))
            .execute(conn)
    }

    pub fn unassign_all_members(
        conn: &mut PgConnection,
        dept_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::update(personnel.filter(department_id.eq(dept_id)))
            .set((
                department_id.eq(None::<i32>),
                is_commander.eq(false),
            ))
            .execute(conn)
    }

    pub fn assign_member(
        conn: &mut PgConnection,
        person: i32,
        dept_id: i32,
        commander: bool,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        diesel::update(personnel.filter(id.eq(person)))
            .set((department_id.eq(dept_id), is_commander.eq(commander)))
            .execute(conn)
    }

    /// Whole roster with a flag marking current members, for the
    /// assignment picker.
    pub fn full_roster(
        conn: &mut PgConnection,
    ) -> Result<Vec<(i32, String, String, String, Option<i32>)>, diesel::result::Error> {
        use crate::schema::personnel::dsl::*;
        personnel
            .order(full_name.asc())
            .select((id, full_name, rank, personal_number, department_id))
            .load(conn)
    }
}
