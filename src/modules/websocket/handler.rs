use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_ws::{Message, Session};

use super::message::{ClientMessage, ServerMessage};
use crate::store::Store;

async fn send(session: &mut Session, message: &ServerMessage) -> Result<(), actix_ws::Closed> {
    match serde_json::to_string(message) {
        Ok(json) => session.text(json).await,
        Err(e) => {
            tracing::error!("Cannot serialize server message: {}", e);
            Ok(())
        }
    }
}

/// `GET /ws`. The subscription lives as long as the socket; a closed socket
/// drops its store receiver.
pub async fn websocket_handler(
    req: HttpRequest,
    stream: web::Payload,
    store: web::Data<Store>,
) -> Result<HttpResponse, Error> {
    tracing::debug!("WebSocket upgrade request from {:?}", req.peer_addr());

    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, stream)?;
    let mut rx = store.subscribe();

    actix_web::rt::spawn(async move {
        let initial = ServerMessage::state_changed(&rx.borrow_and_update().clone());
        if send(&mut ws_session, &initial).await.is_err() {
            return;
        }

        loop {
            tokio::select! {
                msg = msg_stream.recv() => {
                    let reply = match msg {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<ClientMessage>(&text) {
                                Ok(ClientMessage::Ping) => Some(ServerMessage::Pong),
                                Ok(ClientMessage::Refresh) => {
                                    let state = rx.borrow().clone();
                                    Some(ServerMessage::state_changed(&state))
                                }
                                Err(e) => {
                                    tracing::warn!("Unparseable client message: {}", e);
                                    Some(ServerMessage::Error { message: e.to_string() })
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if ws_session.pong(&data).await.is_err() {
                                break;
                            }
                            None
                        }
                        Some(Ok(Message::Close(reason))) => {
                            tracing::info!("WebSocket close frame: {:?}", reason);
                            break;
                        }
                        Some(Ok(Message::Binary(_))) => {
                            tracing::warn!("Binary messages are not supported");
                            None
                        }
                        Some(Ok(Message::Pong(_) | Message::Continuation(_) | Message::Nop)) => None,
                        Some(Err(e)) => {
                            tracing::error!("WebSocket protocol error: {}", e);
                            break;
                        }
                        None => break,
                    };

                    if let Some(reply) = reply {
                        if send(&mut ws_session, &reply).await.is_err() {
                            break;
                        }
                    }
                }

                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = rx.borrow_and_update().clone();
                    if send(&mut ws_session, &ServerMessage::state_changed(&state)).await.is_err() {
                        tracing::debug!("Subscriber went away");
                        break;
                    }
                }
            }
        }

        let _ = ws_session.close(None).await;
        tracing::debug!("WebSocket loop finished");
    });

    tracing::info!("WebSocket subscriber connected");
    Ok(response)
}
