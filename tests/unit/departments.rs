use roster_backend::db::models::department::UpsertDepartmentRequest;
use roster_backend::error::AppError;
use roster_backend::validation::department::validate_department;

#[test]
fn name_error_message_matches_api() {
    let req: UpsertDepartmentRequest =
        serde_json::from_value(serde_json::json!({ "commander_id": 3 })).unwrap();
    match validate_department(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "Department name is required");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn commander_error_message_matches_api() {
    let req: UpsertDepartmentRequest =
        serde_json::from_value(serde_json::json!({ "name": "Alpha" })).unwrap();
    match validate_department(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "Department commander is required");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn name_is_trimmed() {
    let req: UpsertDepartmentRequest =
        serde_json::from_value(serde_json::json!({ "name": "  Alpha ", "commander_id": 3 }))
            .unwrap();
    let (name, commander_id) = validate_department(&req).unwrap();
    assert_eq!(name, "Alpha");
    assert_eq!(commander_id, 3);
}

#[test]
fn commander_field_accepts_camel_case() {
    let req: UpsertDepartmentRequest = serde_json::from_value(serde_json::json!({
        "name": "Alpha",
        "commanderId": 9,
        "soldierIds": [1, 2]
    }))
    .unwrap();
    assert_eq!(req.commander_id, Some(9));
    assert_eq!(req.soldier_ids, Some(vec![1, 2]));
}
