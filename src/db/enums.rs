use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Certification state of a person for a skill. The wire values are the
/// Hebrew strings the roster has always used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum CertificationStatus {
    #[serde(rename = "מוסמך כשיר")]
    Certified,
    #[serde(rename = "בתהליך הסמכה")]
    InTraining,
    #[serde(rename = "נכשל")]
    Failed,
    #[serde(rename = "פג תוקף")]
    Expired,
}

impl FromSql<Text, Pg> for CertificationStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "מוסמך כשיר" => Ok(CertificationStatus::Certified),
            "בתהליך הסמכה" => Ok(CertificationStatus::InTraining),
            "נכשל" => Ok(CertificationStatus::Failed),
            "פג תוקף" => Ok(CertificationStatus::Expired),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for CertificationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            CertificationStatus::Certified => out.write_all("מוסמך כשיר".as_bytes())?,
            CertificationStatus::InTraining => out.write_all("בתהליך הסמכה".as_bytes())?,
            CertificationStatus::Failed => out.write_all("נכשל".as_bytes())?,
            CertificationStatus::Expired => out.write_all("פג תוקף".as_bytes())?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    Vacation,
    Personal,
    Medical,
    Military,
    Reserves,
    Course,
    Other,
}

impl FromSql<Text, Pg> for ConstraintType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "vacation" => Ok(ConstraintType::Vacation),
            "personal" => Ok(ConstraintType::Personal),
            "medical" => Ok(ConstraintType::Medical),
            "military" => Ok(ConstraintType::Military),
            "reserves" => Ok(ConstraintType::Reserves),
            "course" => Ok(ConstraintType::Course),
            "other" => Ok(ConstraintType::Other),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ConstraintType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ConstraintType::Vacation => out.write_all(b"vacation")?,
            ConstraintType::Personal => out.write_all(b"personal")?,
            ConstraintType::Medical => out.write_all(b"medical")?,
            ConstraintType::Military => out.write_all(b"military")?,
            ConstraintType::Reserves => out.write_all(b"reserves")?,
            ConstraintType::Course => out.write_all(b"course")?,
            ConstraintType::Other => out.write_all(b"other")?,
        }
        Ok(IsNull::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_status_wire_values() {
        let json = serde_json::to_string(&CertificationStatus::Certified).unwrap();
        assert_eq!(json, "\"מוסמך כשיר\"");
        let parsed: CertificationStatus = serde_json::from_str("\"פג תוקף\"").unwrap();
        assert_eq!(parsed, CertificationStatus::Expired);
        assert!(serde_json::from_str::<CertificationStatus>("\"certified\"").is_err());
    }

    #[test]
    fn constraint_type_wire_values() {
        let parsed: ConstraintType = serde_json::from_str("\"reserves\"").unwrap();
        assert_eq!(parsed, ConstraintType::Reserves);
        assert!(serde_json::from_str::<ConstraintType>("\"holiday\"").is_err());
    }
}
