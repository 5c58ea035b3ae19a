use crate::modules::notification::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/notifications")
            .service(list_notifications)
            .service(get_panel)
            .service(toggle_panel)
            .service(close_panel)
            .service(select_tab)
            .service(report_scroll)
            .service(mark_all_read)
            .service(open_notification),
    );
}
