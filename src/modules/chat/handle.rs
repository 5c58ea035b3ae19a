use actix_web::{delete, get, post, put, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_session_user,
    modules::chat::{
        model::{
            MessagesResponse, RosterResponse, SearchQuery, SelectUserBody, SendMessageBody,
            SharedMedia,
        },
        schema::{Message, OnlineUser},
        service::ChatService,
    },
    utils::ValidatedQuery,
};

#[get("/users")]
pub async fn get_roster(
    chat_service: web::Data<ChatService>,
) -> Result<success::Success<RosterResponse>, error::Error> {
    Ok(success::Success::ok(Some(chat_service.roster())))
}

#[put("/selected")]
pub async fn select_user(
    chat_service: web::Data<ChatService>,
    body: web::Json<SelectUserBody>,
) -> Result<success::Success<OnlineUser>, error::Error> {
    let user = chat_service.select_user(&body.user_id)?;
    Ok(success::Success::ok(Some(user)).message("Conversation selected"))
}

#[delete("/selected")]
pub async fn deselect_user(
    chat_service: web::Data<ChatService>,
) -> Result<success::Success<()>, error::Error> {
    chat_service.deselect_user();
    Ok(success::Success::no_content())
}

#[get("/messages")]
pub async fn get_messages(
    chat_service: web::Data<ChatService>,
) -> Result<success::Success<MessagesResponse>, error::Error> {
    Ok(success::Success::ok(Some(chat_service.messages())))
}

#[post("/messages")]
pub async fn send_message(
    chat_service: web::Data<ChatService>,
    body: web::Json<SendMessageBody>,
    req: HttpRequest,
) -> Result<success::Success<Message>, error::Error> {
    let sender = get_session_user(&req).ok().map(|user| user.username);
    let message = chat_service.send_message(body.into_inner(), sender.as_deref())?;
    Ok(success::Success::created(Some(message)).message("Message sent"))
}

#[get("/search")]
pub async fn search_messages(
    chat_service: web::Data<ChatService>,
    query: ValidatedQuery<SearchQuery>,
) -> Result<success::Success<Vec<Message>>, error::Error> {
    Ok(success::Success::ok(Some(chat_service.search(&query.0.q))))
}

#[get("/media")]
pub async fn get_shared_media(
    chat_service: web::Data<ChatService>,
) -> Result<success::Success<SharedMedia>, error::Error> {
    Ok(success::Success::ok(Some(chat_service.shared_media())))
}
