use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReq {
    #[schema(example = "INT-001")]
    pub intern_id: String,
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "s3cret")]
    pub password: String,
    /// Face photos as data URLs
    #[schema(example = json!(["data:image/png;base64,iVBORw0KGgo..."]))]
    pub images: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginFaceReq {
    #[schema(example = "INT-001")]
    pub intern_id: String,
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "s3cret")]
    pub password: String,
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub image: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PunchOutReq {
    #[schema(example = "INT-001")]
    pub intern_id: String,
    #[schema(example = "2025-03-07 17:30:00")]
    pub punch_out_time: String,
    #[schema(example = "08:25:13")]
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Registration successful")]
    pub message: String,
}

/// Outcome of a face login or punch-out. Always sent with HTTP 200; the
/// `status` field carries success or failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2025-03-07 09:02:11")]
    pub punch_in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "INT-001")]
    pub intern_id: Option<String>,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
            punch_in_time: None,
            intern_id: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            ..Self::success(message)
        }
    }
}
