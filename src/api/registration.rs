use crate::{
    auth::password::hash_password,
    db,
    error::AppError,
    model::attendance::TIMESTAMP_FORMAT,
    models::{MessageResponse, RegistrationReq},
    utils::{data_url::decode_data_url, face_store::FaceStore, face_store::is_safe_component},
};
use actix_web::{HttpResponse, web};
use chrono::Local;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Register an intern with their face photos
#[utoipa::path(
    post,
    path = "/submit_registration",
    request_body = RegistrationReq,
    responses(
        (status = 200, description = "Intern registered", body = MessageResponse, example = json!({
            "message": "Registration successful"
        })),
        (status = 400, description = "Missing field, unusable internId or malformed image", body = Object, example = json!({
            "error": "Image 2 is not a valid data URL"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Registration"
)]
#[instrument(
    name = "submit_registration",
    skip(payload, pool, faces),
    fields(intern_id = %payload.intern_id, images = payload.images.len())
)]
pub async fn submit_registration(
    payload: web::Json<RegistrationReq>,
    pool: web::Data<SqlitePool>,
    faces: web::Data<FaceStore>,
) -> Result<HttpResponse, AppError> {
    let RegistrationReq {
        intern_id,
        username,
        password,
        images,
    } = payload.into_inner();

    if !is_safe_component(&intern_id) {
        info!("Rejected internId unusable as a folder name");
        return Err(AppError::bad_request("Invalid internId"));
    }

    // Decode everything first so a bad photo leaves no partial registration.
    let images = images
        .iter()
        .enumerate()
        .map(|(i, data_url)| {
            decode_data_url(data_url).map_err(|e| {
                info!(index = i, error = %e, "Rejected registration image");
                AppError::bad_request(format!("Image {} is not a valid data URL", i + 1))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let password_hash = web::block(move || hash_password(&password)).await??;

    // Photos first: a failed write must not leave an intern row behind.
    let store = faces.get_ref().clone();
    let folder_id = intern_id.clone();
    let written = web::block(move || store.save(&folder_id, &images)).await??;

    let created_at = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
    db::insert_intern(pool.get_ref(), &intern_id, &username, &password_hash, &created_at).await?;

    info!(files = written.len(), "Intern registered");

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Registration successful".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{post_json, predicting, test_app, test_config};
    use crate::db::{self, tests::test_pool};
    use crate::models::MessageResponse;
    use crate::utils::data_url::tests::png_data_url;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn stores_hashed_password_and_faces() {
        let pool = test_pool().await;
        let config = test_config("register-ok");
        let faces = config.face_data_dir.clone();
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), config);

        let req = post_json(
            "/submit_registration",
            json!({
                "internId": "INT-1",
                "username": "ana",
                "password": "s3cret",
                "images": [png_data_url(), png_data_url()]
            }),
        )
        .to_request();
        let resp: MessageResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.message, "Registration successful");

        let rows = db::find_interns(&pool, "INT-1", "ana").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_ne!(rows[0].password_hash, "s3cret");

        assert!(faces.join("INT-1/face_1.png").is_file());
        assert!(faces.join("INT-1/face_2.png").is_file());
        assert!(!faces.join("INT-1/face_3.png").exists());
    }

    #[actix_web::test]
    async fn registering_twice_creates_two_rows() {
        let pool = test_pool().await;
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), test_config("register-twice"));

        for _ in 0..2 {
            let req = post_json(
                "/submit_registration",
                json!({ "internId": "INT-1", "username": "ana", "password": "pw", "images": [] }),
            )
            .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(db::find_interns(&pool, "INT-1", "ana").await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn malformed_image_persists_nothing() {
        let pool = test_pool().await;
        let config = test_config("register-bad-image");
        let faces = config.face_data_dir.clone();
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), config);

        let req = post_json(
            "/submit_registration",
            json!({
                "internId": "INT-1",
                "username": "ana",
                "password": "pw",
                "images": [png_data_url(), "no comma here"]
            }),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(db::find_interns(&pool, "INT-1", "ana").await.unwrap().is_empty());
        assert!(!faces.join("INT-1").exists());
    }

    #[actix_web::test]
    async fn failed_photo_write_leaves_no_row() {
        let pool = test_pool().await;
        let config = test_config("register-write-fails");
        // A plain file where the face folder root should be.
        std::fs::create_dir_all(config.face_data_dir.parent().unwrap()).unwrap();
        std::fs::write(&config.face_data_dir, b"not a folder").unwrap();
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), config);

        let req = post_json(
            "/submit_registration",
            json!({
                "internId": "INT-1",
                "username": "ana",
                "password": "pw",
                "images": [png_data_url()]
            }),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(db::find_interns(&pool, "INT-1", "ana").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn missing_field_is_rejected() {
        let pool = test_pool().await;
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), test_config("register-missing"));

        let req = post_json(
            "/submit_registration",
            json!({ "internId": "INT-1", "username": "ana", "images": [] }),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn path_like_intern_id_is_rejected() {
        let pool = test_pool().await;
        let app = test_app!(pool.clone(), predicting("INT-1", 0.9), test_config("register-escape"));

        let req = post_json(
            "/submit_registration",
            json!({ "internId": "../x", "username": "ana", "password": "pw", "images": [] }),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(db::find_interns(&pool, "../x", "ana").await.unwrap().is_empty());
    }
}
