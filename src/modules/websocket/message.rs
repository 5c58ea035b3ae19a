use serde::{Deserialize, Serialize};

use crate::store::RootState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Ping,
    /// Ask for the current summary without waiting for a dispatch.
    Refresh,
}

/// The parts of the store a subscribed view re-renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub message_count: usize,
    pub unread_count: usize,
    pub selected_user_id: Option<String>,
    pub online_count: usize,
    pub signed_in: bool,
    pub users_loading: bool,
    pub register_loading: bool,
}

impl From<&RootState> for StateSummary {
    fn from(state: &RootState) -> Self {
        StateSummary {
            message_count: state.chat.messages.len(),
            unread_count: state.notification.unread_count(),
            selected_user_id: state.chat.selected_user.as_ref().map(|u| u.id.clone()),
            online_count: state.chat.online_users.len(),
            signed_in: state.auth.user.is_some(),
            users_loading: state.users.loading,
            register_loading: state.users.register_loading,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    StateChanged { state: StateSummary },
    Pong,
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

impl ServerMessage {
    pub fn state_changed(state: &RootState) -> Self {
        ServerMessage::StateChanged { state: state.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{chat::slice::ChatAction, notification::slice::NotificationAction};
    use crate::store::Store;

    #[test]
    fn test_client_messages() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"refresh"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Refresh));
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"sendMessage"}"#).is_err());
    }

    #[test]
    fn test_summary_tracks_dispatches() {
        let store = Store::default();
        let summary = StateSummary::from(store.state().as_ref());
        assert_eq!(summary.online_count, 4);
        assert_eq!(summary.unread_count, 14);
        assert!(summary.selected_user_id.is_none());

        store.dispatch(ChatAction::SelectUser(Some("4".into())));
        let after = store.dispatch(NotificationAction::MarkAllRead);
        let summary = StateSummary::from(after.as_ref());
        assert_eq!(summary.unread_count, 0);
        assert_eq!(summary.selected_user_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_server_message_shape() {
        let json =
            serde_json::to_value(ServerMessage::state_changed(&RootState::default())).unwrap();
        assert_eq!(json["type"], "stateChanged");
        assert_eq!(json["state"]["onlineCount"], 4);
        assert_eq!(serde_json::to_string(&ServerMessage::Pong).unwrap(), r#"{"type":"pong"}"#);
    }
}
