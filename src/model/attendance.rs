use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Closed attendance outcome set. The store enforces the same set with a
/// CHECK constraint, so nothing outside these two variants is ever persisted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
pub enum Status {
    Present,
    Absent,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeName": "Alice",
        "employeeID": "E1",
        "date": "2024-01-10",
        "status": "Present",
        "createdAt": "2024-01-10T09:00:00"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Alice")]
    pub employee_name: String,

    /// The employee's code ("E1"), not a row id. Serialized as `employeeID`
    /// to match the wire contract the dashboard consumes.
    #[serde(rename = "employeeID")]
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: Status,

    #[schema(example = "2024-01-10T09:00:00", value_type = String)]
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_parses_exact_variants_only() {
        assert_eq!(Status::from_str("Present").unwrap(), Status::Present);
        assert_eq!(Status::from_str("Absent").unwrap(), Status::Absent);
        assert!(Status::from_str("Late").is_err());
        assert!(Status::from_str("present").is_err());
        assert!(Status::from_str("").is_err());
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = AttendanceRecord {
            id: 1,
            employee_name: "Alice".into(),
            employee_id: "E1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: Status::Present,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["employeeName"], "Alice");
        assert_eq!(json["employeeID"], "E1");
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["status"], "Present");
        assert!(json.get("createdAt").is_some());
    }
}
