use actix_web::{get, web};

use crate::{
    api::{error, success},
    modules::friend::{
        model::{FriendBadges, FriendListResponse, FriendQuery},
        schema::FriendSuggestion,
        service::FriendService,
    },
};

#[get("/suggestions")]
pub async fn list_suggestions(
    friend_service: web::Data<FriendService>,
) -> Result<success::Success<Vec<FriendSuggestion>>, error::Error> {
    Ok(success::Success::ok(Some(friend_service.suggestions())))
}

#[get("")]
pub async fn list_friends(
    friend_service: web::Data<FriendService>,
    query: web::Query<FriendQuery>,
) -> Result<success::Success<FriendListResponse>, error::Error> {
    Ok(success::Success::ok(Some(friend_service.list(query.tab))))
}

#[get("/badges")]
pub async fn get_badges(
    friend_service: web::Data<FriendService>,
) -> Result<success::Success<FriendBadges>, error::Error> {
    Ok(success::Success::ok(Some(friend_service.badges())))
}
