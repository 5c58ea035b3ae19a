use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::chat::schema::{FileRef, Message, OnlineUser};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectUserBody {
    pub user_id: String,
}

/// `attachments` are ids returned by `POST /api/files`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessageBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Uuid>,
}

/// Input to message composition once blob ids are resolved.
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub text: String,
    pub files: Vec<FileRef>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    #[validate(length(max = 200, message = "Search text is too long"))]
    pub q: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub online_users: Vec<OnlineUser>,
    pub selected_user: Option<OnlineUser>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SharedMedia {
    pub images: Vec<FileRef>,
    pub files: Vec<FileRef>,
}
