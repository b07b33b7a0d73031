use roster_backend::db::enums::ConstraintType;
use roster_backend::db::models::constraint::UpsertConstraintRequest;
use roster_backend::error::AppError;
use roster_backend::validation::constraint::validate_constraint;

fn request(value: serde_json::Value) -> UpsertConstraintRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn type_field_uses_lowercase_wire_names() {
    let req = request(serde_json::json!({
        "person_id": 5,
        "date": "2025-08-13",
        "type": "reserves",
        "is_full_day": true
    }));
    assert_eq!(req.kind, Some(ConstraintType::Reserves));

    let bad: Result<UpsertConstraintRequest, _> = serde_json::from_value(serde_json::json!({
        "person_id": 5,
        "date": "2025-08-13",
        "type": "holiday"
    }));
    assert!(bad.is_err());
}

#[test]
fn missing_core_fields_rejected_with_api_message() {
    let req = request(serde_json::json!({ "date": "2025-08-13", "type": "vacation" }));
    match validate_constraint(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "person_id, date, and type are required");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn partial_day_requires_both_times() {
    let req = request(serde_json::json!({
        "person_id": 5,
        "date": "2025-08-13",
        "type": "medical",
        "start_time": "09:00"
    }));
    match validate_constraint(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "start_time and end_time are required when not full day");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn partial_day_requires_ordered_times() {
    let req = request(serde_json::json!({
        "person_id": 5,
        "date": "2025-08-13",
        "type": "medical",
        "start_time": "15:00",
        "end_time": "09:00"
    }));
    match validate_constraint(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "start_time must be before end_time");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn full_day_drops_times() {
    let req = request(serde_json::json!({
        "person_id": 5,
        "date": "2025-08-13",
        "type": "vacation",
        "is_full_day": true,
        "start_time": "09:00",
        "end_time": "12:00"
    }));
    let valid = validate_constraint(&req).unwrap();
    assert!(valid.is_full_day);
    assert!(valid.start_time.is_none());
    assert!(valid.end_time.is_none());
}
