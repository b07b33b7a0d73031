use crate::db::enums::ConstraintType;
use crate::db::models::constraint::UpsertConstraintRequest;
use crate::error::AppError;
use crate::validation::schedule::validate_time_window;
use chrono::NaiveDate;

/// Validated constraint fields shared by create and update.
pub struct ValidConstraint {
    pub person_id: i32,
    pub date: NaiveDate,
    pub kind: ConstraintType,
    pub is_full_day: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub fn validate_constraint(req: &UpsertConstraintRequest) -> Result<ValidConstraint, AppError> {
    let (person_id, date, kind) = match (req.person_id, req.date, req.kind.clone()) {
        (Some(p), Some(d), Some(k)) => (p, d, k),
        _ => {
            return Err(AppError::validation(
                "person_id, date, and type are required",
            ));
        }
    };

    if req.is_full_day {
        return Ok(ValidConstraint {
            person_id,
            date,
            kind,
            is_full_day: true,
            start_time: None,
            end_time: None,
        });
    }

    let (start, end) = match (req.start_time.as_deref(), req.end_time.as_deref()) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(AppError::validation(
                "start_time and end_time are required when not full day",
            ));
        }
    };
    validate_time_window(start, end)
        .map_err(|_| AppError::validation("start_time must be before end_time"))?;

    Ok(ValidConstraint {
        person_id,
        date,
        kind,
        is_full_day: false,
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(is_full_day: bool, start: Option<&str>, end: Option<&str>) -> UpsertConstraintRequest {
        UpsertConstraintRequest {
            person_id: Some(1),
            date: "2025-08-13".parse().ok(),
            kind: Some(ConstraintType::Vacation),
            is_full_day,
            start_time: start.map(|s| s.to_string()),
            end_time: end.map(|s| s.to_string()),
            description: None,
        }
    }

    #[test]
    fn full_day_needs_no_times() {
        let valid = validate_constraint(&request(true, None, None)).unwrap();
        assert!(valid.is_full_day);
        assert!(valid.start_time.is_none());
    }

    #[test]
    fn partial_day_needs_ordered_times() {
        assert!(validate_constraint(&request(false, Some("09:00"), Some("12:00"))).is_ok());
        assert!(validate_constraint(&request(false, None, Some("12:00"))).is_err());
        assert!(validate_constraint(&request(false, Some("12:00"), Some("09:00"))).is_err());
        assert!(validate_constraint(&request(false, Some("12:00"), Some("12:00"))).is_err());
    }

    #[test]
    fn missing_core_fields_rejected() {
        let mut req = request(true, None, None);
        req.kind = None;
        assert!(validate_constraint(&req).is_err());

        let mut req = request(true, None, None);
        req.person_id = None;
        assert!(validate_constraint(&req).is_err());
    }
}
