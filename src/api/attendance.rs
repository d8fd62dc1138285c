use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, Status};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendance {
    #[schema(example = "Alice")]
    pub employee_name: Option<String>,
    #[serde(rename = "employeeID")]
    #[schema(example = "E1")]
    pub employee_id: Option<String>,
    #[schema(example = "2024-01-10", format = "date")]
    pub date: Option<String>,
    #[schema(example = "Present")]
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    #[schema(example = "success")]
    pub message: String,
    pub data: Vec<AttendanceRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedAttendance {
    #[schema(example = 1)]
    pub id: i64,
}

#[derive(Serialize, ToSchema)]
pub struct CreateAttendanceResponse {
    #[schema(example = "Attendance recorded successfully")]
    pub message: String,
    pub data: CreatedAttendance,
}

/// A payload that passed every precondition. Only values of this type reach
/// the store; name and employee code are already trimmed.
#[derive(Debug, PartialEq)]
pub struct NewAttendance {
    pub employee_name: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: Status,
}

pub fn validate(payload: &CreateAttendance) -> Result<NewAttendance, ApiError> {
    let employee_name = payload.employee_name.as_deref().unwrap_or("").trim();
    let employee_id = payload.employee_id.as_deref().unwrap_or("").trim();
    let date = payload.date.as_deref().unwrap_or("");
    let status = payload.status.as_deref().unwrap_or("");

    if employee_name.is_empty() || employee_id.is_empty() || date.is_empty() || status.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    let status = Status::from_str(status)
        .map_err(|_| ApiError::validation("Status must be Present or Absent"))?;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Date must be in YYYY-MM-DD format"))?;

    Ok(NewAttendance {
        employee_name: employee_name.to_string(),
        employee_id: employee_id.to_string(),
        date,
        status,
    })
}

/// List attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records, most recent first", body = AttendanceListResponse),
        (status = 400, description = "Storage failure", body = Object, example = json!({
            "error": "error returned from database"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder, ApiError> {
    let records = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, employee_name, employee_id, date, status, created_at
        FROM attendance
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    debug!(count = records.len(), "listed attendance records");

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        message: "success".to_string(),
        data: records,
    }))
}

/// Record attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 200, description = "Record created", body = CreateAttendanceResponse),
        (status = 400, description = "Validation or storage failure", body = Object, example = json!({
            "error": "All fields are required"
        }))
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<impl Responder, ApiError> {
    let new = validate(&payload)?;

    let result = sqlx::query(
        r#"
        INSERT INTO attendance (employee_name, employee_id, date, status)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new.employee_name)
    .bind(&new.employee_id)
    .bind(new.date)
    .bind(new.status)
    .execute(pool.get_ref())
    .await?;

    let id = result.last_insert_rowid();
    info!(id, employee_id = %new.employee_id, date = %new.date, "attendance recorded");

    Ok(HttpResponse::Ok().json(CreateAttendanceResponse {
        message: "Attendance recorded successfully".to_string(),
        data: CreatedAttendance { id },
    }))
}

/// Delete an attendance record
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(
        ("id", Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted (or was already absent)", body = Object, example = json!({
            "message": "Attendance record deleted successfully"
        })),
        (status = 400, description = "Storage failure", body = Object, example = json!({
            "error": "error returned from database"
        }))
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    // Deleting an id that is not there is not an error on this surface.
    let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    info!(id, rows_affected = result.rows_affected(), "attendance delete");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Attendance record deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, id: &str, date: &str, status: &str) -> CreateAttendance {
        CreateAttendance {
            employee_name: Some(name.to_string()),
            employee_id: Some(id.to_string()),
            date: Some(date.to_string()),
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn valid_payload_passes_and_is_trimmed() {
        let new = validate(&payload("  Alice  ", " E1 ", "2024-01-10", "Present")).unwrap();
        assert_eq!(new.employee_name, "Alice");
        assert_eq!(new.employee_id, "E1");
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(new.status, Status::Present);
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        let cases = [
            payload("", "E1", "2024-01-10", "Present"),
            payload("   ", "E1", "2024-01-10", "Present"),
            payload("Alice", "", "2024-01-10", "Present"),
            payload("Alice", "E1", "", "Present"),
            payload("Alice", "E1", "2024-01-10", ""),
        ];
        for case in cases {
            let err = validate(&case).unwrap_err();
            assert_eq!(err.to_string(), "All fields are required");
        }

        // None fields behave like empty ones
        let err = validate(&CreateAttendance {
            employee_name: None,
            employee_id: None,
            date: None,
            status: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn status_outside_closed_set_is_rejected() {
        let err = validate(&payload("Alice", "E1", "2024-01-10", "Late")).unwrap_err();
        assert_eq!(err.to_string(), "Status must be Present or Absent");

        // case-sensitive, like the CHECK constraint
        let err = validate(&payload("Alice", "E1", "2024-01-10", "present")).unwrap_err();
        assert_eq!(err.to_string(), "Status must be Present or Absent");
    }

    #[test]
    fn malformed_date_is_rejected() {
        for bad in ["10-01-2024", "2024/01/10", "2024-13-01", "not-a-date"] {
            let err = validate(&payload("Alice", "E1", bad, "Present")).unwrap_err();
            assert_eq!(err.to_string(), "Date must be in YYYY-MM-DD format");
        }
    }

    #[test]
    fn field_presence_is_checked_before_status() {
        // A payload failing both checks reports the missing-field error.
        let err = validate(&payload("", "E1", "2024-01-10", "Late")).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }
}
