use crate::api::attendance::{
    AttendanceListResponse, CreateAttendance, CreateAttendanceResponse, CreatedAttendance,
};
use crate::model::attendance::{AttendanceRecord, Status};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Attendance API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracker

Minimal REST backend for recording and browsing daily employee attendance.

### Key Features
- **Record attendance** for an employee on a date (Present / Absent)
- **List records**, most recent first
- **Delete records** by id

### Response Format
JSON responses with a `message` field; failures return `400` with an `error` string.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::list_attendance,
        crate::api::attendance::create_attendance,
        crate::api::attendance::delete_attendance,
    ),
    components(
        schemas(
            AttendanceRecord,
            Status,
            CreateAttendance,
            CreatedAttendance,
            CreateAttendanceResponse,
            AttendanceListResponse,
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance recording APIs"),
    )
)]
pub struct ApiDoc;
