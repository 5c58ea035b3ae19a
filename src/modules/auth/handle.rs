use actix_web::{
    cookie::{time, Cookie, SameSite},
    post, web, HttpRequest,
};

use crate::{
    api::{error, success},
    constants::SESSION_COOKIE,
    middlewares::get_session_user,
    modules::auth::{
        model::{LoginModel, SessionUser},
        service::AuthService,
    },
    ENV,
};

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value).path("/").http_only(true).same_site(SameSite::Lax).finish()
}

#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    credentials: web::Json<LoginModel>,
) -> Result<success::Success<SessionUser>, error::Error> {
    let user = auth_service.login(credentials.into_inner())?;
    Ok(success::Success::ok(Some(user))
        .message("Signin successful")
        .cookies(vec![session_cookie(ENV.session_token.clone())]))
}

#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthService>,
) -> Result<success::Success<()>, error::Error> {
    auth_service.logout();
    let mut cookie = session_cookie(String::new());
    cookie.set_max_age(time::Duration::seconds(0));
    cookie.set_expires(time::OffsetDateTime::UNIX_EPOCH);
    Ok(success::Success::no_content().cookies(vec![cookie]))
}

pub async fn session(req: HttpRequest) -> Result<success::Success<SessionUser>, error::Error> {
    let user = get_session_user(&req)?;
    Ok(success::Success::ok(Some(user)).message("Session retrieved successfully"))
}
