use actix_web::{get, post, web};

use crate::{
    api::{error, success},
    store::{Action, RootState, Store},
};

#[get("")]
pub async fn get_state(
    store: web::Data<Store>,
) -> Result<success::Success<RootState>, error::Error> {
    Ok(success::Success::ok(Some(store.state().as_ref().clone())))
}

/// Applies one raw action and answers with the snapshot it produced.
#[post("/dispatch")]
pub async fn dispatch(
    store: web::Data<Store>,
    action: web::Json<Action>,
) -> Result<success::Success<RootState>, error::Error> {
    let action = action.into_inner();
    let kind = action.kind();
    let state = store.dispatch(action);
    Ok(success::Success::ok(Some(state.as_ref().clone())).message(kind))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::test::{init_app, logged_in};

    #[actix_web::test]
    async fn test_dispatch_roster_and_friend_actions() {
        let (app, store) = init_app!();

        let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
            .set_json(serde_json::json!({
                "slice": "chat",
                "action": {
                    "type": "addOnlineUser",
                    "payload": { "id": "5", "username": "Neo", "lastSeen": "2024-01-01T00:00:00Z" }
                }
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "chat/addOnlineUser");
        assert_eq!(body["data"]["chat"]["onlineUsers"].as_array().unwrap().len(), 5);

        let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
            .set_json(serde_json::json!({
                "slice": "friend",
                "action": { "type": "removeBlocked", "payload": "4" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.state().friend.blocked.len(), 13);

        let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
            .set_json(serde_json::json!({ "slice": "notification", "action": { "type": "clear" } }))
            .to_request();
        test::call_service(&app, req).await;
        assert!(store.state().notification.notifications.is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_action_is_rejected_before_dispatch() {
        let (app, store) = init_app!();
        let req = logged_in(test::TestRequest::get().uri("/api/store")).to_request();
        test::call_service(&app, req).await;
        let before = store.state();

        let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
            .set_json(serde_json::json!({
                "slice": "chat",
                "action": { "type": "deleteEverything" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(std::sync::Arc::ptr_eq(&before, &store.state()));
    }

    fn multiple_message(files: usize) -> serde_json::Value {
        let files: Vec<_> = (0..files)
            .map(|i| {
                serde_json::json!({
                    "url": format!("/api/files/{i}"),
                    "name": format!("photo{i}.png"),
                    "size": 10,
                    "mimeType": "image/png",
                })
            })
            .collect();
        serde_json::json!({
            "id": "m1",
            "content": "Sent files",
            "sender": "neo",
            "timestamp": "2024-01-01T00:00:00Z",
            "type": "multiple",
            "files": files,
        })
    }

    #[actix_web::test]
    async fn test_multiple_message_needs_two_files() {
        let (app, store) = init_app!();

        for files in [0, 1] {
            let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
                .set_json(serde_json::json!({
                    "slice": "chat",
                    "action": { "type": "addMessage", "payload": multiple_message(files) }
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
                .set_json(serde_json::json!({
                    "slice": "chat",
                    "action": { "type": "setMessages", "payload": [multiple_message(files)] }
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
        assert!(store.state().chat.messages.is_empty());

        let req = logged_in(test::TestRequest::post().uri("/api/store/dispatch"))
            .set_json(serde_json::json!({
                "slice": "chat",
                "action": { "type": "addMessage", "payload": multiple_message(2) }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.state().chat.messages.len(), 1);
    }

    #[actix_web::test]
    async fn test_snapshot() {
        let (app, _store) = init_app!();

        let req = logged_in(test::TestRequest::get().uri("/api/store")).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["friend"]["received"].as_array().unwrap().len(), 11);
        assert_eq!(body["data"]["users"]["registerLoading"], false);
    }
}
