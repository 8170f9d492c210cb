use crate::{
    config::Config,
    db,
    error::AppError,
    model::attendance::punch_out_date,
    models::{PunchOutReq, StatusResponse},
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::{info, instrument};

const SAVED: &str = "Punch-out time saved successfully.";
const NO_RECORD: &str = "No punch-in record found to update.";

/// Close the intern's latest open session for the day
#[utoipa::path(
    post,
    path = "/submit_punchout",
    request_body = PunchOutReq,
    responses(
        (status = 200, description = "Outcome in the `status` field", body = StatusResponse, example = json!({
            "status": "error",
            "message": "No punch-in record found to update."
        })),
        (status = 400, description = "Missing field or body is not JSON"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "submit_punchout",
    skip(payload, pool, config),
    fields(intern_id = %payload.intern_id)
)]
pub async fn submit_punchout(
    payload: web::Json<PunchOutReq>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let pool = pool.get_ref();
    let intern_id = payload.intern_id.as_str();
    let date = punch_out_date(&payload.punch_out_time);

    // The punch-in write may not be visible yet when the client punches out
    // right after logging in.
    let retry = config.punch_out_retry();
    let open = retry
        .retry_until_some(move || db::find_open_record(pool, intern_id, date))
        .await?;

    let Some(record) = open else {
        info!(date, attempts = retry.max_attempts(), "No open attendance record");
        return Ok(HttpResponse::Ok().json(StatusResponse::error(NO_RECORD)));
    };

    db::close_record(pool, record.id, &payload.punch_out_time, &payload.duration).await?;

    info!(
        record_id = record.id,
        punch_in = %record.punch_in,
        duration = %payload.duration,
        "Punch-out saved"
    );

    Ok(HttpResponse::Ok().json(StatusResponse::success(SAVED)))
}
