pub mod attendance;
pub mod login;
pub mod pages;
pub mod registration;

#[cfg(test)]
pub(crate) mod testing {
    use actix_web::test;
    use image::RgbImage;
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::classifier::{FaceClassifier, Prediction};
    use crate::config::Config;

    /// Answers every image with the same prediction.
    pub(crate) struct FixedClassifier(pub Prediction);

    impl FaceClassifier for FixedClassifier {
        fn classify(&self, _image: &RgbImage) -> anyhow::Result<Prediction> {
            Ok(self.0.clone())
        }
    }

    pub(crate) fn predicting(label: &str, confidence: f32) -> Arc<dyn FaceClassifier> {
        Arc::new(FixedClassifier(Prediction {
            label: label.to_string(),
            confidence,
        }))
    }

    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "intern-attendance-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    pub(crate) fn test_config(scratch: &str) -> Config {
        let root = scratch_dir(scratch);
        Config {
            face_data_dir: root.join("face_data"),
            templates_dir: root.join("templates"),
            punch_out_retry_delay_ms: 1,
            ..Config::default()
        }
    }

    /// Full route table over the given store, classifier and config.
    macro_rules! test_app {
        ($pool:expr, $classifier:expr, $config:expr) => {{
            let config: crate::config::Config = $config;
            let faces = crate::utils::face_store::FaceStore::new(config.face_data_dir.clone());
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data(actix_web::web::Data::new($pool))
                    .app_data(actix_web::web::Data::from($classifier))
                    .app_data(actix_web::web::Data::new(faces))
                    .app_data(actix_web::web::Data::new(config.clone()))
                    .configure(|cfg| crate::routes::configure(cfg, &config)),
            )
            .await
        }};
    }
    pub(crate) use test_app;

    /// POST with a peer address so the per-IP limiters can key the request.
    pub(crate) fn post_json(uri: &str, body: serde_json::Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .set_json(body)
    }
}
