use crate::db::models::person::UpsertPersonRequest;
use crate::error::AppError;

fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Create and update take the same full record; population, department,
/// arrival date and notes are the only optional fields.
pub fn validate_person(req: &UpsertPersonRequest) -> Result<(), AppError> {
    let strings_ok = present(&req.full_name)
        && present(&req.personal_number)
        && present(&req.rank)
        && present(&req.branch)
        && present(&req.residence)
        && present(&req.phone)
        && present(&req.id_number)
        && present(&req.marital_status)
        && present(&req.course_cycle);
    let dates_ok = req.birth_date.is_some()
        && req.enlistment_date.is_some()
        && req.discharge_date.is_some();

    if !strings_ok || !dates_ok {
        return Err(AppError::validation("All required fields must be provided"));
    }
    Ok(())
}

pub fn validate_batch_ids(ids: &Option<Vec<i32>>, target_field: &str, target_present: bool) -> Result<Vec<i32>, AppError> {
    let ids = match ids {
        Some(list) if !list.is_empty() => list.clone(),
        _ => {
            return Err(AppError::validation(format!(
                "Missing required fields: ids (array) and {}",
                target_field
            )));
        }
    };
    if !target_present {
        return Err(AppError::validation(format!(
            "Missing required fields: ids (array) and {}",
            target_field
        )));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> UpsertPersonRequest {
        UpsertPersonRequest {
            full_name: Some("Dana Levi".to_string()),
            personal_number: Some("8112345".to_string()),
            rank: Some("Sergeant".to_string()),
            branch: Some("Signals".to_string()),
            residence: Some("Haifa".to_string()),
            phone: Some("050-1234567".to_string()),
            population_id: None,
            department_id: None,
            id_number: Some("301234567".to_string()),
            birth_date: "2000-04-02".parse().ok(),
            enlistment_date: "2018-11-20".parse().ok(),
            discharge_date: "2021-11-19".parse().ok(),
            arrival_date: None,
            marital_status: Some("single".to_string()),
            course_cycle: Some("2019-A".to_string()),
            notes: None,
        }
    }

    #[test]
    fn accepts_full_record() {
        assert!(validate_person(&full_request()).is_ok());
    }

    #[test]
    fn rejects_missing_required_string() {
        let mut req = full_request();
        req.personal_number = None;
        assert!(validate_person(&req).is_err());

        let mut req = full_request();
        req.rank = Some("   ".to_string());
        assert!(validate_person(&req).is_err());
    }

    #[test]
    fn rejects_missing_required_date() {
        let mut req = full_request();
        req.discharge_date = None;
        assert!(validate_person(&req).is_err());
    }

    #[test]
    fn optional_fields_stay_optional() {
        let mut req = full_request();
        req.arrival_date = None;
        req.notes = None;
        req.population_id = None;
        assert!(validate_person(&req).is_ok());
    }

    #[test]
    fn batch_ids_rules() {
        assert!(validate_batch_ids(&Some(vec![1, 2]), "populationId", true).is_ok());
        assert!(validate_batch_ids(&Some(vec![]), "populationId", true).is_err());
        assert!(validate_batch_ids(&None, "populationId", true).is_err());
        assert!(validate_batch_ids(&Some(vec![1]), "populationId", false).is_err());
    }
}
