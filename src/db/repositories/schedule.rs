use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::models::schedule::{
    Assignment, NewAssignment, NewScheduleWeek, NewTimeBlock, ScheduleWeek, TimeBlock,
};

pub struct ScheduleRepo;

impl ScheduleRepo {
    pub fn find_week(
        conn: &mut PgConnection,
        position: i32,
        week: NaiveDate,
    ) -> Result<Option<ScheduleWeek>, diesel::result::Error> {
        use crate::schema::schedule_weeks::dsl::*;
        schedule_weeks
            .filter(position_id.eq(position))
            .filter(week_start.eq(week))
            .select(ScheduleWeek::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert_week(
        conn: &mut PgConnection,
        new_week: &NewScheduleWeek,
    ) -> Result<ScheduleWeek, diesel::result::Error> {
        diesel::insert_into(crate::schema::schedule_weeks::table)
            .values(new_week)
            .get_result(conn)
    }

    pub fn update_notes(
        conn: &mut PgConnection,
        week_id: i32,
        new_notes: &str,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::schedule_weeks::dsl::*;
        diesel::update(schedule_weeks.filter(id.eq(week_id)))
            .set(notes.eq(new_notes))
            .execute(conn)
    }

    pub fn blocks_for_week(
        conn: &mut PgConnection,
        week_id: i32,
    ) -> Result<Vec<TimeBlock>, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        time_blocks
            .filter(schedule_week_id.eq(week_id))
            .order(start_time.asc())
            .select(TimeBlock::as_select())
            .load(conn)
    }

    pub fn find_block(
        conn: &mut PgConnection,
        block_id: i32,
    ) -> Result<Option<TimeBlock>, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        time_blocks
            .filter(id.eq(block_id))
            .select(TimeBlock::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_block_by_window(
        conn: &mut PgConnection,
        week_id: i32,
        start: &str,
        end: &str,
    ) -> Result<Option<TimeBlock>, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        time_blocks
            .filter(schedule_week_id.eq(week_id))
            .filter(start_time.eq(start))
            .filter(end_time.eq(end))
            .select(TimeBlock::as_select())
            .first(conn)
            .optional()
    }

    pub fn block_count_for_week(
        conn: &mut PgConnection,
        week_id: i32,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        time_blocks
            .filter(schedule_week_id.eq(week_id))
            .count()
            .get_result(conn)
    }

    pub fn insert_block(
        conn: &mut PgConnection,
        new_block: &NewTimeBlock,
    ) -> Result<TimeBlock, diesel::result::Error> {
        diesel::insert_into(crate::schema::time_blocks::table)
            .values(new_block)
            .get_result(conn)
    }

    pub fn update_block(
        conn: &mut PgConnection,
        block_id: i32,
        start: &str,
        end: &str,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        diesel::update(time_blocks.filter(id.eq(block_id)))
            .set((start_time.eq(start), end_time.eq(end)))
            .execute(conn)
    }

    pub fn delete_block(
        conn: &mut PgConnection,
        block_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::time_blocks::dsl::*;
        diesel::delete(time_blocks.filter(id.eq(block_id))).execute(conn)
    }

    pub fn delete_assignments_for_block(
        conn: &mut PgConnection,
        block_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        diesel::delete(assignments.filter(time_block_id.eq(block_id))).execute(conn)
    }

    /// Assignments of a week with the assigned person (if any) and the
    /// block's time window.
    pub fn assignments_for_week(
        conn: &mut PgConnection,
        week_id: i32,
    ) -> Result<
        Vec<(Assignment, Option<String>, Option<String>, String, String)>,
        diesel::result::Error,
    > {
        use crate::schema::{assignments, personnel, time_blocks};
        assignments::table
            .inner_join(time_blocks::table)
            .left_join(personnel::table)
            .filter(time_blocks::schedule_week_id.eq(week_id))
            .order((time_blocks::start_time.asc(), assignments::day_of_week.asc()))
            .select((
                Assignment::as_select(),
                personnel::full_name.nullable(),
                personnel::rank.nullable(),
                time_blocks::start_time,
                time_blocks::end_time,
            ))
            .load(conn)
    }

    pub fn slot_taken(
        conn: &mut PgConnection,
        block_id: i32,
        role: i32,
        day: i32,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        diesel::select(diesel::dsl::exists(
            assignments
                .filter(time_block_id.eq(block_id))
                .filter(role_id.eq(role))
                .filter(day_of_week.eq(day)),
        ))
        .get_result(conn)
    }

    pub fn insert_assignment(
        conn: &mut PgConnection,
        new_assignment: &NewAssignment,
    ) -> Result<Assignment, diesel::result::Error> {
        diesel::insert_into(crate::schema::assignments::table)
            .values(new_assignment)
            .get_result(conn)
    }

    pub fn delete_assignment(
        conn: &mut PgConnection,
        assignment_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        diesel::delete(assignments.filter(id.eq(assignment_id))).execute(conn)
    }
}
