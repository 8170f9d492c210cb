use chrono::NaiveDateTime;

/// Text layout of every stored timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, sqlx::FromRow)]
pub struct Attendance {
    /// SQLite rowid
    pub id: i64,
    pub intern_id: String,
    pub date: String,
    pub punch_in: String,
    pub punch_out: Option<String>,
    pub duration: Option<String>,
}

/// Formats a punch-in moment, returning `(date, timestamp)`.
pub fn punch_in_stamp(at: NaiveDateTime) -> (String, String) {
    (at.format("%Y-%m-%d").to_string(), at.format(TIMESTAMP_FORMAT).to_string())
}

/// The day a client-supplied punch-out time belongs to: its first
/// whitespace-separated token.
pub fn punch_out_date(punch_out: &str) -> &str {
    punch_out.split_whitespace().next().unwrap_or("")
}
