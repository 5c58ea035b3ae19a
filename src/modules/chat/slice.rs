use serde::{Deserialize, Serialize};

use crate::modules::chat::schema::{Message, OnlineUser};
use crate::store::{list, Slice};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub selected_user: Option<OnlineUser>,
    pub online_users: Vec<OnlineUser>,
    pub loading: bool,
    pub error: Option<String>,
}

fn seed_roster() -> Vec<OnlineUser> {
    let now = chrono::Utc::now();
    [("1", "John Doe"), ("2", "Jane Smith"), ("3", "Mike Johnson"), ("4", "Sarah Williams")]
        .into_iter()
        .map(|(id, username)| OnlineUser {
            id: id.to_string(),
            username: username.to_string(),
            last_seen: now,
        })
        .collect()
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            selected_user: None,
            online_users: seed_roster(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ChatAction {
    /// `None` clears the selection; an id missing from the roster is ignored.
    SelectUser(Option<String>),
    AddMessage(Message),
    SetMessages(Vec<Message>),
    ClearMessages,
    SetOnlineUsers(Vec<OnlineUser>),
    AddOnlineUser(OnlineUser),
    RemoveOnlineUser(String),
    SetLoading(bool),
    SetError(Option<String>),
}

impl ChatAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatAction::SelectUser(_) => "chat/setSelectedUser",
            ChatAction::AddMessage(_) => "chat/addMessage",
            ChatAction::SetMessages(_) => "chat/setMessages",
            ChatAction::ClearMessages => "chat/clearMessages",
            ChatAction::SetOnlineUsers(_) => "chat/setOnlineUsers",
            ChatAction::AddOnlineUser(_) => "chat/addOnlineUser",
            ChatAction::RemoveOnlineUser(_) => "chat/removeOnlineUser",
            ChatAction::SetLoading(_) => "chat/setLoading",
            ChatAction::SetError(_) => "chat/setError",
        }
    }
}

impl Slice for ChatState {
    type Action = ChatAction;

    fn reduce(&self, action: ChatAction) -> Self {
        let mut next = self.clone();
        match action {
            ChatAction::SelectUser(None) => next.selected_user = None,
            ChatAction::SelectUser(Some(id)) => {
                if let Some(user) = list::find_by_id(&self.online_users, &id) {
                    next.selected_user = Some(user.clone());
                }
            }
            ChatAction::AddMessage(message) => list::push_unique(&mut next.messages, message),
            ChatAction::SetMessages(messages) => next.messages = list::dedup_by_id(messages),
            ChatAction::ClearMessages => next.messages.clear(),
            ChatAction::SetOnlineUsers(users) => next.online_users = list::dedup_by_id(users),
            ChatAction::AddOnlineUser(user) => list::push_unique(&mut next.online_users, user),
            ChatAction::RemoveOnlineUser(id) => list::remove_by_id(&mut next.online_users, &id),
            ChatAction::SetLoading(loading) => next.loading = loading,
            ChatAction::SetError(error) => next.error = error,
        }
        next
    }
}
