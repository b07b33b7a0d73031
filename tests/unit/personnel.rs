use roster_backend::db::models::person::{
    BatchItemResult, BatchOutcome, BatchPopulationRequest, UpsertPersonRequest,
};
use roster_backend::error::AppError;
use roster_backend::validation::person::{validate_batch_ids, validate_person};

fn full_request() -> UpsertPersonRequest {
    serde_json::from_value(serde_json::json!({
        "full_name": "Dana Levi",
        "personal_number": "8112345",
        "rank": "Sergeant",
        "branch": "Signals",
        "residence": "Haifa",
        "phone": "050-1234567",
        "id_number": "305123456",
        "birth_date": "2003-04-12",
        "enlistment_date": "2022-08-01",
        "discharge_date": "2025-08-01",
        "marital_status": "single",
        "course_cycle": "2022-B"
    }))
    .unwrap()
}

#[test]
fn missing_required_field_uses_catch_all_message() {
    let mut req = full_request();
    req.rank = None;
    match validate_person(&req) {
        Err(AppError::Validation { message }) => {
            assert_eq!(message, "All required fields must be provided");
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn whitespace_only_field_is_rejected() {
    let mut req = full_request();
    req.full_name = Some("   ".to_string());
    assert!(validate_person(&req).is_err());
}

#[test]
fn optional_fields_may_be_absent() {
    let req = full_request();
    assert!(req.population_id.is_none());
    assert!(req.arrival_date.is_none());
    assert!(validate_person(&req).is_ok());
}

#[test]
fn batch_ids_require_nonempty_list_and_target() {
    assert!(validate_batch_ids(&Some(vec![1, 2]), "populationId", true).is_ok());
    assert!(validate_batch_ids(&Some(vec![]), "populationId", true).is_err());
    assert!(validate_batch_ids(&None, "populationId", true).is_err());

    match validate_batch_ids(&Some(vec![1]), "departmentId", false) {
        Err(AppError::Validation { message }) => {
            assert_eq!(
                message,
                "Missing required fields: ids (array) and departmentId"
            );
        }
        _ => panic!("expected validation error"),
    }
}

#[test]
fn batch_outcome_tallies_success_and_error() {
    let outcome = BatchOutcome::from_results(vec![
        BatchItemResult {
            id: 1,
            success: true,
            error: None,
        },
        BatchItemResult {
            id: 2,
            success: false,
            error: Some("Personnel not found".to_string()),
        },
        BatchItemResult {
            id: 3,
            success: true,
            error: None,
        },
    ]);
    assert_eq!(outcome.success_count, 2);
    assert_eq!(outcome.error_count, 1);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["successCount"], 2);
    assert_eq!(json["errorCount"], 1);
    assert_eq!(json["message"], "Batch operation completed");
    assert!(json["results"][0]["error"].is_null());
}

#[test]
fn batch_request_accepts_both_casings() {
    let camel: BatchPopulationRequest =
        serde_json::from_value(serde_json::json!({ "ids": [1], "populationId": 4 })).unwrap();
    assert_eq!(camel.population_id, Some(4));

    let snake: BatchPopulationRequest =
        serde_json::from_value(serde_json::json!({ "ids": [1], "population_id": 4 })).unwrap();
    assert_eq!(snake.population_id, Some(4));
}
