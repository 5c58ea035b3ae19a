use crate::modules::navigation::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(home).service(login_page).service(register_page).service(chat_page);
}
