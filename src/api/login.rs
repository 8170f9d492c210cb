use crate::{
    auth::password::verify_any,
    classifier::FaceClassifier,
    db,
    error::AppError,
    model::attendance::punch_in_stamp,
    models::{LoginFaceReq, StatusResponse},
    utils::data_url::{decode_data_url, decode_rgb_image},
};
use actix_web::{HttpResponse, web};
use chrono::Local;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const BAD_IMAGE: &str = "Failed to process image";
const FACE_MISMATCH: &str = "Face does not match.";

/// Face login: password check, face match, then punch-in
#[utoipa::path(
    post,
    path = "/login_face",
    request_body = LoginFaceReq,
    responses(
        (status = 200, description = "Outcome in the `status` field; failures are not HTTP errors", body = StatusResponse, example = json!({
            "status": "success",
            "message": "Login successful!",
            "punchInTime": "2025-03-07 09:02:11",
            "internId": "INT-001"
        })),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "login_face",
    skip(payload, pool, classifier),
    fields(intern_id = %payload.intern_id)
)]
pub async fn login_face(
    payload: web::Json<LoginFaceReq>,
    pool: web::Data<SqlitePool>,
    classifier: web::Data<dyn FaceClassifier>,
) -> Result<HttpResponse, AppError> {
    let LoginFaceReq {
        intern_id,
        username,
        password,
        image,
    } = payload.into_inner();

    // 1️⃣ Credentials
    let rows = db::find_interns(pool.get_ref(), &intern_id, &username).await?;
    debug!(candidates = rows.len(), "Verifying password");

    let verified = web::block(move || {
        verify_any(&password, rows.iter().map(|row| row.password_hash.as_str()))
    })
    .await?;

    if !verified {
        info!("Invalid credentials");
        return Ok(HttpResponse::Ok().json(StatusResponse::error(INVALID_CREDENTIALS)));
    }

    // 2️⃣ Image
    let image = match decode_data_url(&image).and_then(|bytes| decode_rgb_image(&bytes)) {
        Ok(image) => image,
        Err(e) => {
            info!(error = %e, "Failed to decode login image");
            return Ok(HttpResponse::Ok().json(StatusResponse::error(BAD_IMAGE)));
        }
    };

    // 3️⃣ Face match
    let classifier = classifier.into_inner();
    let prediction = web::block(move || classifier.classify(&image)).await??;

    if !prediction.matches(&intern_id) {
        info!(
            predicted = %prediction.label,
            confidence = prediction.confidence,
            "Face does not match"
        );
        return Ok(HttpResponse::Ok().json(StatusResponse::error(FACE_MISMATCH)));
    }

    // 4️⃣ Punch-in
    let (date, punch_in) = punch_in_stamp(Local::now().naive_local());
    let record_id = db::insert_punch_in(pool.get_ref(), &intern_id, &date, &punch_in).await?;

    info!(record_id, confidence = prediction.confidence, "Login successful");

    Ok(HttpResponse::Ok().json(StatusResponse {
        punch_in_time: Some(punch_in),
        intern_id: Some(intern_id),
        ..StatusResponse::success("Login successful!")
    }))
}
