use roster_backend::db::models::position::UpsertPositionRequest;
use roster_backend::error::AppError;
use roster_backend::validation::position::{validate_position, validate_role};

fn request(value: serde_json::Value) -> UpsertPositionRequest {
    serde_json::from_value(value).unwrap()
}

fn validation_message(result: Result<impl Sized, AppError>) -> String {
    match result {
        Err(AppError::Validation { message }) => message,
        _ => panic!("expected validation error"),
    }
}

#[test]
fn position_requires_name_and_holders() {
    let msg = validation_message(validate_position(&request(serde_json::json!({
        "role_holders": [{ "name": "Operator", "qualification_ids": [1] }]
    }))));
    assert_eq!(msg, "Position name is required");

    let msg = validation_message(validate_position(&request(serde_json::json!({
        "name": "Gate"
    }))));
    assert_eq!(msg, "role_holders field is required");

    let msg = validation_message(validate_position(&request(serde_json::json!({
        "name": "Gate",
        "role_holders": []
    }))));
    assert_eq!(msg, "At least one role holder is required");
}

#[test]
fn role_holder_errors_name_the_offender() {
    let msg = validation_message(validate_position(&request(serde_json::json!({
        "name": "Gate",
        "role_holders": [
            { "name": "Operator", "qualification_ids": [1] },
            { "qualification_ids": [2] }
        ]
    }))));
    assert_eq!(msg, "Role holder 2 name is required");

    let msg = validation_message(validate_position(&request(serde_json::json!({
        "name": "Gate",
        "role_holders": [{ "name": "Medic", "qualification_ids": [] }]
    }))));
    assert_eq!(msg, "Role holder \"Medic\" must have at least one qualification");
}

#[test]
fn valid_position_passes_with_trimmed_names() {
    let (name, holders) = validate_position(&request(serde_json::json!({
        "name": " Gate ",
        "role_holders": [{ "name": " Operator ", "qualification_ids": [1, 2] }]
    })))
    .unwrap();
    assert_eq!(name, "Gate");
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].name, "Operator");
    assert_eq!(holders[0].qualification_ids, vec![1, 2]);
}

#[test]
fn role_requires_name_and_skills() {
    let ok = validate_role(
        &Some("Driver".to_string()),
        &serde_json::from_value(serde_json::json!([{ "skill_id": 3 }])).ok(),
    );
    assert_eq!(ok.unwrap(), "Driver");

    let msg = validation_message(validate_role(&None, &None));
    assert_eq!(msg, "Role name is required");

    let msg = validation_message(validate_role(
        &Some("Driver".to_string()),
        &serde_json::from_value(serde_json::json!([])).ok(),
    ));
    assert_eq!(msg, "At least one required skill must be specified");
}
