use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, From};
use serde_json::json;

/// Faults a handler cannot answer with a `status: "error"` payload.
#[derive(Debug, Display, From)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    BadRequest(String),

    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),

    #[display(fmt = "classifier error: {}", _0)]
    Classifier(anyhow::Error),

    #[display(fmt = "io error: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "password hashing error: {}", _0)]
    Hashing(argon2::password_hash::Error),

    #[display(fmt = "blocking task failed: {}", _0)]
    Blocking(actix_web::error::BlockingError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(message) => {
                HttpResponse::BadRequest().json(json!({ "error": message }))
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Something went wrong, Contact with system admin"
                }))
            }
        }
    }
}
