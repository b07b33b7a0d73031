use crate::db::models::position::{RequiredSkillInput, RoleHolderInput, UpsertPositionRequest};
use crate::error::AppError;

/// Validated role-holder: trimmed name plus its qualification ids.
pub struct ValidRoleHolder {
    pub name: String,
    pub qualification_ids: Vec<i32>,
}

pub fn validate_position(
    req: &UpsertPositionRequest,
) -> Result<(String, Vec<ValidRoleHolder>), AppError> {
    let name = match req.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => return Err(AppError::validation("Position name is required")),
    };

    let holders = req
        .role_holders
        .as_ref()
        .ok_or_else(|| AppError::validation("role_holders field is required"))?;
    if holders.is_empty() {
        return Err(AppError::validation("At least one role holder is required"));
    }

    let mut validated = Vec::with_capacity(holders.len());
    for (index, holder) in holders.iter().enumerate() {
        validated.push(validate_role_holder(index, holder)?);
    }
    Ok((name, validated))
}

fn validate_role_holder(index: usize, holder: &RoleHolderInput) -> Result<ValidRoleHolder, AppError> {
    let name = match holder.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => {
            return Err(AppError::validation(format!(
                "Role holder {} name is required",
                index + 1
            )));
        }
    };
    let qualification_ids = match holder.qualification_ids.as_ref() {
        Some(ids) if !ids.is_empty() => ids.clone(),
        _ => {
            return Err(AppError::validation(format!(
                "Role holder \"{}\" must have at least one qualification",
                name
            )));
        }
    };
    Ok(ValidRoleHolder {
        name,
        qualification_ids,
    })
}

pub fn validate_role(
    name: &Option<String>,
    required_skills: &Option<Vec<RequiredSkillInput>>,
) -> Result<String, AppError> {
    let name = match name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => return Err(AppError::validation("Role name is required")),
    };
    match required_skills {
        Some(skills) if !skills.is_empty() => Ok(name),
        _ => Err(AppError::validation(
            "At least one required skill must be specified",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(name: Option<&str>, quals: Option<Vec<i32>>) -> RoleHolderInput {
        RoleHolderInput {
            name: name.map(|s| s.to_string()),
            qualification_ids: quals,
        }
    }

    fn request(name: Option<&str>, holders: Option<Vec<RoleHolderInput>>) -> UpsertPositionRequest {
        UpsertPositionRequest {
            name: name.map(|s| s.to_string()),
            notes: None,
            role_holders: holders,
        }
    }

    #[test]
    fn accepts_named_position_with_qualified_holders() {
        let req = request(
            Some("Gate guard"),
            Some(vec![holder(Some("Day shift"), Some(vec![3]))]),
        );
        let (name, holders) = validate_position(&req).unwrap();
        assert_eq!(name, "Gate guard");
        assert_eq!(holders.len(), 1);
        assert_eq!(holders[0].qualification_ids, vec![3]);
    }

    #[test]
    fn rejects_missing_name_or_holders() {
        assert!(validate_position(&request(None, Some(vec![]))).is_err());
        assert!(validate_position(&request(Some("Gate guard"), None)).is_err());
        assert!(validate_position(&request(Some("Gate guard"), Some(vec![]))).is_err());
    }

    #[test]
    fn rejects_unnamed_or_unqualified_holder() {
        let req = request(Some("Gate guard"), Some(vec![holder(Some("  "), Some(vec![3]))]));
        assert!(validate_position(&req).is_err());

        let req = request(Some("Gate guard"), Some(vec![holder(Some("Day"), Some(vec![]))]));
        assert!(validate_position(&req).is_err());
    }

    #[test]
    fn role_rules() {
        let skills = Some(vec![RequiredSkillInput {
            skill_id: 1,
            is_mandatory: true,
        }]);
        assert!(validate_role(&Some("Night".to_string()), &skills).is_ok());
        assert!(validate_role(&None, &skills).is_err());
        assert!(validate_role(&Some("Night".to_string()), &Some(vec![])).is_err());
    }
}
