use crate::{config::Config, error::AppError};
use actix_web::{HttpResponse, get, http::header::ContentType, web};
use strum::Display;

/// HTML pages served from the templates folder.
#[derive(Debug, Clone, Copy, Display)]
pub enum Page {
    #[strum(serialize = "intern_login.html")]
    Login,
    #[strum(serialize = "intern_register.html")]
    Register,
    #[strum(serialize = "intern.html")]
    Dashboard,
}

async fn render(page: Page, config: &Config) -> Result<HttpResponse, AppError> {
    let path = config.templates_dir.join(page.to_string());
    let html = web::block(move || std::fs::read_to_string(path)).await??;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

#[get("/")]
pub async fn login_page(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    render(Page::Login, &config).await
}

#[get("/register")]
pub async fn register_page(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    render(Page::Register, &config).await
}

#[get("/intern")]
pub async fn dashboard_page(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    render(Page::Dashboard, &config).await
}
