use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use crate::model::{attendance::Attendance, intern::Intern};

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid DATABASE_URL {database_url:?}"))?
        .create_if_missing(true);

    let filename = options.clone().get_filename();
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database folder {}", parent.display()))?;
    }

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    create_schema(&pool).await?;

    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interns (
            intern_id TEXT NOT NULL,
            username TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            intern_id TEXT NOT NULL,
            date TEXT NOT NULL,
            punch_in TEXT NOT NULL,
            punch_out TEXT,
            duration TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// -------------------- interns --------------------

pub async fn insert_intern(
    pool: &SqlitePool,
    intern_id: &str,
    username: &str,
    password_hash: &str,
    created_at: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO interns (intern_id, username, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(intern_id)
    .bind(username)
    .bind(password_hash)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Every registration row for this id/username pair.
pub async fn find_interns(
    pool: &SqlitePool,
    intern_id: &str,
    username: &str,
) -> Result<Vec<Intern>, sqlx::Error> {
    sqlx::query_as::<_, Intern>(
        r#"
        SELECT intern_id, username, password_hash, created_at
        FROM interns
        WHERE intern_id = ? AND username = ?
        ORDER BY rowid
        "#,
    )
    .bind(intern_id)
    .bind(username)
    .fetch_all(pool)
    .await
}

// -------------------- attendance --------------------

/// Returns the rowid of the new record.
pub async fn insert_punch_in(
    pool: &SqlitePool,
    intern_id: &str,
    date: &str,
    punch_in: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO attendance (intern_id, date, punch_in)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(intern_id)
    .bind(date)
    .bind(punch_in)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Newest record for the intern and day that has not been punched out.
pub async fn find_open_record(
    pool: &SqlitePool,
    intern_id: &str,
    date: &str,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        SELECT rowid AS id, intern_id, date, punch_in, punch_out, duration
        FROM attendance
        WHERE intern_id = ? AND date = ? AND punch_out IS NULL
        ORDER BY punch_in DESC, rowid DESC
        LIMIT 1
        "#,
    )
    .bind(intern_id)
    .bind(date)
    .fetch_optional(pool)
    .await
}

pub async fn close_record(
    pool: &SqlitePool,
    id: i64,
    punch_out: &str,
    duration: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE attendance
        SET punch_out = ?, duration = ?
        WHERE rowid = ?
        "#,
    )
    .bind(punch_out)
    .bind(duration)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
