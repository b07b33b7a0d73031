use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;

use crate::{
    db::models::schedule::{
        Assignment, AssignmentWithDetails, CreateAssignmentRequest, CreateTimeRangeRequest,
        NewAssignment, NewScheduleWeek, NewTimeBlock, ScheduleResponse, ScheduleRoleHolder,
        ScheduleWeek, TimeBlock, TimeRange, UpdateNotesRequest, UpdateTimeRangeRequest,
    },
    db::repositories::positions::RolesRepo,
    db::repositories::schedule::ScheduleRepo,
    error::AppError,
    validation::schedule::validate_time_window,
};

const DEFAULT_BLOCK_START: &str = "08:00";
const DEFAULT_BLOCK_END: &str = "14:00";

pub struct ScheduleService;

impl ScheduleService {
    /// Fetching a week brings it into existence: the row is created on
    /// first access and seeded with one default time block.
    pub fn get_schedule(
        conn: &mut PgConnection,
        position_id: Option<i32>,
        week_start: Option<NaiveDate>,
    ) -> Result<ScheduleResponse, AppError> {
        let (position_id, week_start) = Self::required_week(position_id, week_start)?;
        let week = Self::get_or_create_week(conn, position_id, week_start)?;

        if ScheduleRepo::block_count_for_week(conn, week.id)? == 0 {
            let default_block = NewTimeBlock {
                schedule_week_id: week.id,
                start_time: DEFAULT_BLOCK_START.to_string(),
                end_time: DEFAULT_BLOCK_END.to_string(),
            };
            ScheduleRepo::insert_block(conn, &default_block)?;
        }

        let time_ranges: Vec<TimeRange> = ScheduleRepo::blocks_for_week(conn, week.id)?
            .into_iter()
            .map(|block| TimeRange {
                id: block.id,
                start: block.start_time,
                end: block.end_time,
            })
            .collect();

        let role_holders = Self::role_holders(conn, position_id)?;

        let assignments: Vec<AssignmentWithDetails> =
            ScheduleRepo::assignments_for_week(conn, week.id)?
                .into_iter()
                .map(
                    |(assignment, full_name, rank, start_time, end_time)| AssignmentWithDetails {
                        assignment,
                        full_name,
                        rank,
                        start_time,
                        end_time,
                    },
                )
                .collect();

        Ok(ScheduleResponse {
            time_ranges,
            role_holders,
            assignments,
            notes: week.notes,
            schedule_week_id: week.id,
        })
    }

    pub fn create_time_range(
        conn: &mut PgConnection,
        req: &CreateTimeRangeRequest,
    ) -> Result<TimeBlock, AppError> {
        let (position_id, week_start, start, end) =
            match (req.position_id, req.week_start, &req.start, &req.end) {
                (Some(p), Some(w), Some(s), Some(e)) => (p, w, s.clone(), e.clone()),
                _ => {
                    return Err(AppError::validation(
                        "positionId, weekStart, start, and end are required",
                    ));
                }
            };
        validate_time_window(&start, &end)?;

        let week = Self::get_or_create_week(conn, position_id, week_start)?;
        let new_block = NewTimeBlock {
            schedule_week_id: week.id,
            start_time: start,
            end_time: end,
        };
        Ok(ScheduleRepo::insert_block(conn, &new_block)?)
    }

    pub fn update_time_range(
        conn: &mut PgConnection,
        block_id: i32,
        req: &UpdateTimeRangeRequest,
    ) -> Result<(), AppError> {
        let (start, end) = match (&req.start, &req.end) {
            (Some(s), Some(e)) => (s.clone(), e.clone()),
            _ => return Err(AppError::validation("start and end are required")),
        };
        validate_time_window(&start, &end)?;

        let updated = ScheduleRepo::update_block(conn, block_id, &start, &end)?;
        if updated == 0 {
            return Err(AppError::not_found("Time range"));
        }
        Ok(())
    }

    pub fn delete_time_range(conn: &mut PgConnection, block_id: i32) -> Result<(), AppError> {
        let block = ScheduleRepo::find_block(conn, block_id)?
            .ok_or_else(|| AppError::not_found("Time range"))?;
        if ScheduleRepo::block_count_for_week(conn, block.schedule_week_id)? <= 1 {
            return Err(AppError::validation(
                "Cannot delete the last time range. At least one time range must exist.",
            ));
        }
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            ScheduleRepo::delete_assignments_for_block(conn, block_id)?;
            ScheduleRepo::delete_block(conn, block_id)?;
            Ok(())
        })?;
        Ok(())
    }

    /// The target block must already exist for the given week and window;
    /// assignment never creates schedule rows on its own.
    pub fn create_assignment(
        conn: &mut PgConnection,
        req: &CreateAssignmentRequest,
    ) -> Result<Assignment, AppError> {
        let (position_id, week_start, role_id, date, start, end, person_id) = match (
            req.position_id,
            req.week_start,
            req.role_holder_id,
            req.date,
            &req.start,
            &req.end,
            req.personnel_id,
        ) {
            (Some(p), Some(w), Some(r), Some(d), Some(s), Some(e), Some(person)) => {
                (p, w, r, d, s.clone(), e.clone(), person)
            }
            _ => return Err(AppError::validation("All fields are required")),
        };

        let week = ScheduleRepo::find_week(conn, position_id, week_start)?
            .ok_or_else(|| AppError::not_found("Time block"))?;
        let block = ScheduleRepo::find_block_by_window(conn, week.id, &start, &end)?
            .ok_or_else(|| AppError::not_found("Time block"))?;

        let day_of_week = date.weekday().num_days_from_sunday() as i32;
        if ScheduleRepo::slot_taken(conn, block.id, role_id, day_of_week)? {
            return Err(AppError::conflict("This slot is already assigned"));
        }

        let record = NewAssignment {
            time_block_id: block.id,
            role_id,
            day_of_week,
            person_id: Some(person_id),
        };
        Ok(ScheduleRepo::insert_assignment(conn, &record)?)
    }

    pub fn delete_assignment(
        conn: &mut PgConnection,
        assignment_id: i32,
    ) -> Result<(), AppError> {
        let deleted = ScheduleRepo::delete_assignment(conn, assignment_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Assignment"));
        }
        Ok(())
    }

    pub fn get_notes(
        conn: &mut PgConnection,
        position_id: Option<i32>,
        week_start: Option<NaiveDate>,
    ) -> Result<String, AppError> {
        let (position_id, week_start) = Self::required_week(position_id, week_start)?;
        let week = ScheduleRepo::find_week(conn, position_id, week_start)?;
        Ok(week.map(|w| w.notes).unwrap_or_default())
    }

    pub fn update_notes(conn: &mut PgConnection, req: &UpdateNotesRequest) -> Result<(), AppError> {
        let (position_id, week_start) = Self::required_week(req.position_id, req.week_start)?;
        let week = Self::get_or_create_week(conn, position_id, week_start)?;
        ScheduleRepo::update_notes(conn, week.id, req.notes.as_deref().unwrap_or_default())?;
        Ok(())
    }

    fn required_week(
        position_id: Option<i32>,
        week_start: Option<NaiveDate>,
    ) -> Result<(i32, NaiveDate), AppError> {
        match (position_id, week_start) {
            (Some(p), Some(w)) => Ok((p, w)),
            _ => Err(AppError::validation("positionId and weekStart are required")),
        }
    }

    fn get_or_create_week(
        conn: &mut PgConnection,
        position_id: i32,
        week_start: NaiveDate,
    ) -> Result<ScheduleWeek, AppError> {
        if let Some(week) = ScheduleRepo::find_week(conn, position_id, week_start)? {
            return Ok(week);
        }
        let new_week = NewScheduleWeek {
            position_id,
            week_start,
            notes: String::new(),
        };
        Ok(ScheduleRepo::insert_week(conn, &new_week)?)
    }

    fn role_holders(
        conn: &mut PgConnection,
        position_id: i32,
    ) -> Result<Vec<ScheduleRoleHolder>, AppError> {
        use std::collections::HashMap;

        let roles = RolesRepo::list_for_position(conn, position_id)?;
        let skills = RolesRepo::skills_for_position(conn, position_id)?;
        let mut by_role: HashMap<i32, Vec<i32>> = HashMap::new();
        for (role_skill, _) in skills {
            by_role
                .entry(role_skill.role_id)
                .or_default()
                .push(role_skill.skill_id);
        }

        Ok(roles
            .into_iter()
            .map(|role| ScheduleRoleHolder {
                required_skill_ids: by_role.remove(&role.id).unwrap_or_default(),
                id: role.id,
                position_id: role.position_id,
                name: role.name,
                notes: role.notes,
            })
            .collect())
    }
}
