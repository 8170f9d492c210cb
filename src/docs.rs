use crate::models::{
    LoginFaceReq, MessageResponse, PunchOutReq, RegistrationReq, Status, StatusResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Intern Attendance API",
        version = "0.1.0",
        description = r#"
## Intern Attendance

Interns register with credentials and face photos, log in with their password
plus a live photo checked by a face classifier, and punch out at the end of
the session.

### 📦 Response Format
Face login and punch-out always answer **200** with a JSON `status` field
(`success` or `error`). Only malformed requests and server faults use other
status codes.
"#,
    ),
    paths(
        crate::api::registration::submit_registration,
        crate::api::login::login_face,
        crate::api::attendance::submit_punchout
    ),
    components(
        schemas(
            RegistrationReq,
            LoginFaceReq,
            PunchOutReq,
            Status,
            StatusResponse,
            MessageResponse
        )
    ),
    tags(
        (name = "Registration", description = "Intern registration"),
        (name = "Attendance", description = "Face login, punch-in and punch-out"),
    )
)]
pub struct ApiDoc;
