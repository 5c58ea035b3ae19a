//! Application state container.
//!
//! The store owns one [`RootState`] made of five independent slices. Handlers and
//! services never mutate state directly: they describe the change as an [`Action`]
//! and [`Store::dispatch`] replaces the current snapshot with the reduced one.
//! Snapshots are immutable `Arc`s, so anyone still holding an older one keeps
//! seeing it unchanged.

pub mod handle;
pub mod list;
pub mod route;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::modules::{
    auth::slice::{AuthAction, AuthState},
    chat::slice::{ChatAction, ChatState},
    friend::slice::{FriendAction, FriendState},
    notification::slice::{NotificationAction, NotificationState},
    user::slice::{UsersAction, UsersState},
};

/// A partition of application state with its own pure update function.
pub trait Slice: Clone {
    type Action;

    /// Returns the next value of the slice. Must not fail: requests that reference
    /// unknown ids leave the slice as it was.
    fn reduce(&self, action: Self::Action) -> Self;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RootState {
    pub auth: AuthState,
    pub users: UsersState,
    pub chat: ChatState,
    pub notification: NotificationState,
    pub friend: FriendState,
}

/// Wire shape: `{"slice": "chat", "action": {"type": "addMessage", "payload": {..}}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "slice", content = "action", rename_all = "camelCase")]
pub enum Action {
    Auth(AuthAction),
    Users(UsersAction),
    Chat(ChatAction),
    Notification(NotificationAction),
    Friend(FriendAction),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Auth(a) => a.kind(),
            Action::Users(a) => a.kind(),
            Action::Chat(a) => a.kind(),
            Action::Notification(a) => a.kind(),
            Action::Friend(a) => a.kind(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<UsersAction> for Action {
    fn from(action: UsersAction) -> Self {
        Action::Users(action)
    }
}

impl From<ChatAction> for Action {
    fn from(action: ChatAction) -> Self {
        Action::Chat(action)
    }
}

impl From<NotificationAction> for Action {
    fn from(action: NotificationAction) -> Self {
        Action::Notification(action)
    }
}

impl From<FriendAction> for Action {
    fn from(action: FriendAction) -> Self {
        Action::Friend(action)
    }
}

impl RootState {
    /// Routes the action to its slice; the other four are carried over as they are.
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::Auth(a) => next.auth = self.auth.reduce(a),
            Action::Users(a) => next.users = self.users.reduce(a),
            Action::Chat(a) => next.chat = self.chat.reduce(a),
            Action::Notification(a) => next.notification = self.notification.reduce(a),
            Action::Friend(a) => next.friend = self.friend.reduce(a),
        }
        next
    }
}

pub struct Store {
    tx: watch::Sender<Arc<RootState>>,
}

impl Store {
    pub fn new(initial: RootState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    pub fn state(&self) -> Arc<RootState> {
        self.tx.borrow().clone()
    }

    /// Applies `action` and returns the snapshot it produced. Dispatches are
    /// serialized: each one reduces the snapshot left by the previous one.
    pub fn dispatch(&self, action: impl Into<Action>) -> Arc<RootState> {
        let action = action.into();
        log::debug!("dispatch {}", action.kind());

        let mut applied = None;
        self.tx.send_modify(|state| {
            *state = Arc::new(state.reduce(action));
            applied = Some(Arc::clone(state));
        });
        applied.unwrap_or_else(|| self.state())
    }

    /// Receiver that is marked changed after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(RootState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::SessionUser;

    #[test]
    fn test_dispatch_leaves_previous_snapshot_untouched() {
        let store = Store::default();
        let before = store.state();

        store.dispatch(AuthAction::LoginSuccess(SessionUser::from_email("neo@matrix.io")));

        assert!(before.auth.user.is_none());
        assert_eq!(store.state().auth.user.as_ref().map(|u| u.username.as_str()), Some("neo"));
    }

    #[test]
    fn test_dispatch_only_touches_target_slice() {
        let store = Store::default();
        let before = store.state();

        let after = store.dispatch(NotificationAction::MarkAllRead);

        assert_eq!(after.chat.online_users, before.chat.online_users);
        assert_eq!(after.friend.suggestions, before.friend.suggestions);
        assert_eq!(after.notification.unread_count(), 0);
        assert!(before.notification.unread_count() > 0);
    }

    #[test]
    fn test_subscribers_observe_each_dispatch() {
        let store = Store::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.dispatch(ChatAction::ClearMessages);
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_action_kind_labels() {
        assert_eq!(Action::from(ChatAction::ClearMessages).kind(), "chat/clearMessages");
        assert_eq!(Action::from(UsersAction::RegisterPending).kind(), "users/register/pending");
    }
}
