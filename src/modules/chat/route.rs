use crate::modules::chat::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/chat")
            .service(get_roster)
            .service(select_user)
            .service(deselect_user)
            .service(get_messages)
            .service(send_message)
            .service(search_messages)
            .service(get_shared_media),
    );
}
