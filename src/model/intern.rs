/// One registration. Nothing keeps `intern_id` unique, so a repeated
/// registration is a second row rather than an update.
#[derive(Debug, sqlx::FromRow)]
pub struct Intern {
    pub intern_id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}
