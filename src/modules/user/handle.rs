use actix_web::{get, post, web};

use crate::{
    api::{error, success},
    modules::user::{model::RegisterModel, service::UserService, slice::UsersState},
    utils::ValidatedJson,
};

#[get("")]
pub async fn get_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<UsersState>, error::Error> {
    Ok(success::Success::ok(Some(user_service.snapshot())))
}

#[post("/fetch")]
pub async fn fetch_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<()>, error::Error> {
    let service = user_service.get_ref().clone();
    actix_web::rt::spawn(async move { service.fetch_users().await });
    Ok(success::Success::accepted().message("User list requested"))
}

#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    form: ValidatedJson<RegisterModel>,
) -> Result<success::Success<()>, error::Error> {
    user_service.register_user(form.0).await?;
    Ok(success::Success::created(None).message("Registration successful"))
}
