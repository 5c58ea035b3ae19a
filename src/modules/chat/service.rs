use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::constants::DEFAULT_SENDER;
use crate::modules::chat::{
    model::{MessageDraft, MessagesResponse, RosterResponse, SendMessageBody, SharedMedia},
    schema::{Attachment, Message, OnlineUser},
    slice::ChatAction,
};
use crate::modules::file_upload::FileUploadService;
use crate::store::Store;

/// Builds the message a send produces. Empty text with no files is not a message.
pub fn compose_message(
    draft: MessageDraft,
    sender: Option<&str>,
    timestamp: chrono::DateTime<chrono::Utc>,
) -> Result<Message, error::SystemError> {
    if draft.text.trim().is_empty() && draft.files.is_empty() {
        return Err(error::SystemError::bad_request("Message is empty"));
    }

    let MessageDraft { text, mut files } = draft;
    let caption = |fallback: String| if text.is_empty() { fallback } else { text.clone() };

    let (content, attachment) = match files.len() {
        0 => (text.clone(), Attachment::Text),
        1 => {
            let file = files.remove(0);
            if file.is_image() {
                (caption("Sent an image".to_string()), Attachment::Image { file })
            } else {
                (caption("Sent a file".to_string()), Attachment::File { file })
            }
        }
        n => (caption(format!("Sent {} files", n)), Attachment::Multiple { files }),
    };

    Ok(Message {
        id: uuid::Uuid::now_v7().to_string(),
        content,
        sender: sender.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SENDER).to_string(),
        timestamp,
        attachment,
    })
}

pub fn search_messages(messages: &[Message], query: &str) -> Vec<Message> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    messages.iter().filter(|m| m.content.to_lowercase().contains(&needle)).cloned().collect()
}

pub fn shared_media(messages: &[Message]) -> SharedMedia {
    let mut media = SharedMedia::default();
    for file in messages.iter().flat_map(|m| m.attachment.files()) {
        if file.is_image() {
            media.images.push(file.clone());
        } else {
            media.files.push(file.clone());
        }
    }
    media
}

#[derive(Clone)]
pub struct ChatService {
    store: Arc<Store>,
    files: FileUploadService,
}

impl ChatService {
    pub fn with_dependencies(store: Arc<Store>, files: FileUploadService) -> Self {
        info!("ChatService initialized with dependencies");
        ChatService { store, files }
    }

    pub fn roster(&self) -> RosterResponse {
        let state = self.store.state();
        RosterResponse {
            online_users: state.chat.online_users.clone(),
            selected_user: state.chat.selected_user.clone(),
        }
    }

    pub fn select_user(&self, user_id: &str) -> Result<OnlineUser, error::SystemError> {
        let state = self.store.dispatch(ChatAction::SelectUser(Some(user_id.to_string())));
        state
            .chat
            .selected_user
            .clone()
            .filter(|user| user.id == user_id)
            .ok_or_else(|| error::SystemError::not_found("User is not online"))
    }

    pub fn deselect_user(&self) {
        self.store.dispatch(ChatAction::SelectUser(None));
    }

    pub fn messages(&self) -> MessagesResponse {
        let messages = self.store.state().chat.messages.clone();
        MessagesResponse { total: messages.len(), messages }
    }

    /// Resolves the attached blobs, composes and appends. Needs a selected partner.
    pub fn send_message(
        &self,
        body: SendMessageBody,
        sender: Option<&str>,
    ) -> Result<Message, error::SystemError> {
        if self.store.state().chat.selected_user.is_none() {
            return Err(error::SystemError::bad_request("No conversation selected"));
        }

        let files = body
            .attachments
            .iter()
            .map(|blob_id| self.files.file_ref(blob_id))
            .collect::<Result<Vec<_>, _>>()?;

        let message =
            compose_message(MessageDraft { text: body.content, files }, sender, chrono::Utc::now())?;
        self.store.dispatch(ChatAction::AddMessage(message.clone()));
        Ok(message)
    }

    pub fn search(&self, query: &str) -> Vec<Message> {
        search_messages(&self.store.state().chat.messages, query)
    }

    pub fn shared_media(&self) -> SharedMedia {
        shared_media(&self.store.state().chat.messages)
    }
}
