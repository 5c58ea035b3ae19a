use actix_web::{get, http::header, web, HttpRequest, HttpResponse};

use crate::{
    api::error,
    middlewares::is_authenticated,
    modules::{
        auth::service::AuthService,
        navigation::{
            model::{Guard, Page, PageView},
            service::guard,
        },
    },
};

fn render(req: &HttpRequest, auth_service: &AuthService, page: Page) -> HttpResponse {
    let authenticated = is_authenticated(req);
    match guard(page, authenticated) {
        Guard::Redirect(target) => {
            log::debug!("{} redirected to {}", page.path(), target.path());
            HttpResponse::Found().insert_header((header::LOCATION, target.path())).finish()
        }
        Guard::Render(page) => {
            let user = authenticated.then(|| auth_service.restore_session());
            HttpResponse::Ok().json(PageView { page, path: page.path(), user })
        }
    }
}

#[get("/")]
pub async fn home(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, error::Error> {
    Ok(render(&req, &auth_service, Page::Home))
}

#[get("/login")]
pub async fn login_page(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, error::Error> {
    Ok(render(&req, &auth_service, Page::Login))
}

#[get("/register")]
pub async fn register_page(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, error::Error> {
    Ok(render(&req, &auth_service, Page::Register))
}

#[get("/chat")]
pub async fn chat_page(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, error::Error> {
    Ok(render(&req, &auth_service, Page::Chat))
}
