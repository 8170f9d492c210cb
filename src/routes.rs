use crate::{
    api::{attendance, login, pages, registration},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

// Registration carries several photos as data URLs, login carries one.
const REGISTRATION_BODY_LIMIT: usize = 32 * 1024 * 1024;
const LOGIN_BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = 60_000 / requests_per_min as u64;
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms.max(1))
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("period and burst are non-zero");
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));

    // Pages
    cfg.service(pages::login_page)
        .service(pages::register_page)
        .service(pages::dashboard_page);

    // JSON endpoints
    cfg.service(
        web::resource("/submit_registration")
            .wrap(register_limiter)
            .app_data(web::JsonConfig::default().limit(REGISTRATION_BODY_LIMIT))
            .route(web::post().to(registration::submit_registration)),
    )
    .service(
        web::resource("/login_face")
            .wrap(login_limiter)
            .app_data(web::JsonConfig::default().limit(LOGIN_BODY_LIMIT))
            .route(web::post().to(login::login_face)),
    )
    .service(
        // clients post this one without a JSON content type
        web::resource("/submit_punchout")
            .app_data(web::JsonConfig::default().content_type_required(false))
            .route(web::post().to(attendance::submit_punchout)),
    );
}
