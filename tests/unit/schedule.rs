use chrono::Datelike;
use roster_backend::db::models::schedule::{CreateAssignmentRequest, ScheduleQuery};
use roster_backend::error::AppError;
use roster_backend::validation::schedule::{validate_clock_time, validate_time_window};

#[test]
fn clock_times_must_be_zero_padded() {
    assert!(validate_clock_time("08:00").is_ok());
    assert!(validate_clock_time("8:00").is_err());
    assert!(validate_clock_time("08:5").is_err());
    assert!(validate_clock_time("25:00").is_err());
}

#[test]
fn window_error_message_matches_api() {
    match validate_time_window("14:00", "08:00") {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "Start time must be before end time");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn lexicographic_order_matches_clock_order() {
    // The schedule stores HH:MM strings and compares them directly.
    assert!("08:00" < "08:01");
    assert!("09:59" < "10:00");
    assert!("23:59" > "00:00");
}

#[test]
fn sunday_is_day_zero() {
    // 2025-08-10 is a Sunday, 2025-08-16 the following Saturday.
    let sunday: chrono::NaiveDate = "2025-08-10".parse().unwrap();
    let saturday: chrono::NaiveDate = "2025-08-16".parse().unwrap();
    assert_eq!(sunday.weekday().num_days_from_sunday(), 0);
    assert_eq!(saturday.weekday().num_days_from_sunday(), 6);
}

#[test]
fn assignment_request_accepts_both_casings() {
    let camel: CreateAssignmentRequest = serde_json::from_value(serde_json::json!({
        "positionId": 1,
        "weekStart": "2025-08-10",
        "roleHolderId": 2,
        "date": "2025-08-12",
        "start": "08:00",
        "end": "14:00",
        "personnelId": 9
    }))
    .unwrap();
    assert_eq!(camel.position_id, Some(1));
    assert_eq!(camel.role_holder_id, Some(2));
    assert_eq!(camel.personnel_id, Some(9));

    let snake: CreateAssignmentRequest = serde_json::from_value(serde_json::json!({
        "position_id": 1,
        "week_start": "2025-08-10",
        "role_holder_id": 2,
        "date": "2025-08-12",
        "start": "08:00",
        "end": "14:00",
        "personnel_id": 9
    }))
    .unwrap();
    assert_eq!(snake.position_id, Some(1));
    assert_eq!(snake.personnel_id, Some(9));
}

#[test]
fn schedule_query_accepts_camel_case_params() {
    let query: ScheduleQuery = serde_json::from_value(serde_json::json!({
        "positionId": 3,
        "weekStart": "2025-08-10"
    }))
    .unwrap();
    assert_eq!(query.position_id, Some(3));
    assert_eq!(
        query.week_start,
        Some("2025-08-10".parse::<chrono::NaiveDate>().unwrap())
    );
}
