use crate::db::models::department::UpsertDepartmentRequest;
use crate::error::AppError;

pub fn validate_department(req: &UpsertDepartmentRequest) -> Result<(String, i32), AppError> {
    let name = match req.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => return Err(AppError::validation("Department name is required")),
    };
    let commander_id = req
        .commander_id
        .ok_or_else(|| AppError::validation("Department commander is required"))?;
    Ok((name, commander_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, commander_id: Option<i32>) -> UpsertDepartmentRequest {
        UpsertDepartmentRequest {
            name: name.map(|s| s.to_string()),
            commander_id,
            soldier_ids: None,
        }
    }

    #[test]
    fn requires_name_and_commander() {
        assert!(validate_department(&request(Some("Alpha"), Some(7))).is_ok());
        assert!(validate_department(&request(None, Some(7))).is_err());
        assert!(validate_department(&request(Some("  "), Some(7))).is_err());
        assert!(validate_department(&request(Some("Alpha"), None)).is_err());
    }

    #[test]
    fn soldier_list_is_optional() {
        let mut req = request(Some("Alpha"), Some(7));
        req.soldier_ids = Some(vec![]);
        assert!(validate_department(&req).is_ok());
    }
}
