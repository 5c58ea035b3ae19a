use actix_web::{delete, get, post, put, web};

use crate::{
    api::{error, success},
    modules::notification::{
        model::{NotificationsResponse, OpenedNotification, PanelView, ScrollPosition, TabBody},
        service::NotificationService,
    },
};

#[get("")]
pub async fn list_notifications(
    notification_service: web::Data<NotificationService>,
) -> Result<success::Success<NotificationsResponse>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.list())))
}

#[get("/panel")]
pub async fn get_panel(
    notification_service: web::Data<NotificationService>,
) -> Result<success::Success<PanelView>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.panel_view())))
}

#[post("/panel/toggle")]
pub async fn toggle_panel(
    notification_service: web::Data<NotificationService>,
) -> Result<success::Success<PanelView>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.toggle_panel())))
}

#[delete("/panel")]
pub async fn close_panel(
    notification_service: web::Data<NotificationService>,
) -> Result<success::Success<PanelView>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.close_panel())))
}

#[put("/panel/tab")]
pub async fn select_tab(
    notification_service: web::Data<NotificationService>,
    body: web::Json<TabBody>,
) -> Result<success::Success<PanelView>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.select_tab(body.tab))))
}

#[post("/panel/scroll")]
pub async fn report_scroll(
    notification_service: web::Data<NotificationService>,
    body: web::Json<ScrollPosition>,
) -> Result<success::Success<PanelView>, error::Error> {
    Ok(success::Success::ok(Some(notification_service.scroll(body.into_inner()))))
}

#[post("/read-all")]
pub async fn mark_all_read(
    notification_service: web::Data<NotificationService>,
) -> Result<success::Success<NotificationsResponse>, error::Error> {
    let list = notification_service.mark_all_read();
    Ok(success::Success::ok(Some(list)).message("All notifications marked as read"))
}

#[post("/{notification_id}/open")]
pub async fn open_notification(
    notification_service: web::Data<NotificationService>,
    notification_id: web::Path<String>,
) -> Result<success::Success<OpenedNotification>, error::Error> {
    let opened = notification_service.open_notification(&notification_id)?;
    Ok(success::Success::ok(Some(opened)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::test::{init_app, logged_in};

    #[actix_web::test]
    async fn test_panel_flow() {
        let (app, store) = init_app!();

        let req = logged_in(test::TestRequest::post().uri("/api/notifications/panel/toggle"))
            .to_request();
        let view: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["data"]["open"], true);
        assert_eq!(view["data"]["notifications"].as_array().unwrap().len(), 10);
        assert_eq!(view["data"]["hasMore"], true);

        let req = logged_in(test::TestRequest::post().uri("/api/notifications/panel/scroll"))
            .set_json(serde_json::json!({
                "scrollTop": 400.0, "clientHeight": 300.0, "scrollHeight": 705.0
            }))
            .to_request();
        let view: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["data"]["page"], 2);

        let req = logged_in(test::TestRequest::put().uri("/api/notifications/panel/tab"))
            .set_json(serde_json::json!({ "tab": "read" }))
            .to_request();
        let view: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["data"]["page"], 1);
        assert_eq!(view["data"]["total"], 14);

        let req =
            logged_in(test::TestRequest::post().uri("/api/notifications/1/open")).to_request();
        let opened: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(opened["data"]["selectedUser"]["username"], "John Doe");

        let state = store.state();
        assert_eq!(state.notification.unread_count(), 13);
        assert_eq!(state.chat.selected_user.as_ref().unwrap().id, "1");

        let req = logged_in(test::TestRequest::get().uri("/api/notifications/panel")).to_request();
        let view: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view["data"]["open"], false);
    }

    #[actix_web::test]
    async fn test_bad_tab_is_rejected() {
        let (app, _store) = init_app!();

        let req = logged_in(test::TestRequest::put().uri("/api/notifications/panel/tab"))
            .set_json(serde_json::json!({ "tab": "archived" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_mark_all_read() {
        let (app, store) = init_app!();

        let req = logged_in(test::TestRequest::post().uri("/api/notifications/read-all"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["unreadCount"], 0);
        assert_eq!(store.state().notification.unread_count(), 0);

        let req = logged_in(test::TestRequest::delete().uri("/api/notifications/panel"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
