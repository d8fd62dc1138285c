use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS attendance (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_name TEXT NOT NULL,
    employee_id   TEXT NOT NULL,
    date          DATE NOT NULL,
    status        TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
    created_at    DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Connects and creates the attendance table if it does not exist yet.
/// The pool is capped at a single connection: SQLite serializes writers
/// anyway, and one connection avoids busy-retry handling entirely. It also
/// keeps `sqlite::memory:` databases usable from tests.
pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;

    sqlx::query(SCHEMA).execute(&pool).await?;

    info!(database_url, "connected to SQLite database");
    Ok(pool)
}
