use serde::{Deserialize, Serialize};

use crate::modules::notification::schema::Notification;
use crate::store::{list, Slice};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    pub notifications: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotificationState {
    /// Always counted from the list, so it cannot drift from the `read` flags.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

fn notification(
    id: usize,
    content: String,
    time: String,
    read: bool,
    user_id: usize,
) -> Notification {
    Notification { id: id.to_string(), content, time, read, user_id: user_id.to_string() }
}

fn seed_notifications() -> Vec<Notification> {
    let named = [
        (1, "New message from John Doe", "2 minutes ago", false),
        (2, "New message from Jane Smith", "10 minutes ago", true),
        (3, "New message from Mike Johnson", "1 hour ago", false),
    ]
    .into_iter()
    .map(|(id, content, time, read)| notification(id, content.into(), time.into(), read, id));

    let samples = (0..25).map(|i| {
        notification(
            i + 4,
            format!("Sample notification {}", i + 4),
            format!("{} minutes ago", i + 4),
            i % 2 == 0,
            i % 4 + 1,
        )
    });

    named.chain(samples).collect()
}

impl Default for NotificationState {
    fn default() -> Self {
        Self { notifications: seed_notifications(), loading: false, error: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum NotificationAction {
    /// Newest first: the entry goes to the front of the list.
    Add(Notification),
    MarkRead(String),
    MarkAllRead,
    Remove(String),
    SetNotifications(Vec<Notification>),
    Clear,
    SetLoading(bool),
    SetError(Option<String>),
}

impl NotificationAction {
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationAction::Add(_) => "notification/addNotification",
            NotificationAction::MarkRead(_) => "notification/markAsRead",
            NotificationAction::MarkAllRead => "notification/markAllAsRead",
            NotificationAction::Remove(_) => "notification/removeNotification",
            NotificationAction::SetNotifications(_) => "notification/setNotifications",
            NotificationAction::Clear => "notification/clearNotifications",
            NotificationAction::SetLoading(_) => "notification/setLoading",
            NotificationAction::SetError(_) => "notification/setError",
        }
    }
}

impl Slice for NotificationState {
    type Action = NotificationAction;

    fn reduce(&self, action: NotificationAction) -> Self {
        let mut next = self.clone();
        match action {
            NotificationAction::Add(notification) => {
                list::prepend_unique(&mut next.notifications, notification)
            }
            NotificationAction::MarkRead(id) => {
                if let Some(n) = next.notifications.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
            }
            NotificationAction::MarkAllRead => {
                next.notifications.iter_mut().for_each(|n| n.read = true)
            }
            NotificationAction::Remove(id) => list::remove_by_id(&mut next.notifications, &id),
            NotificationAction::SetNotifications(notifications) => {
                next.notifications = list::dedup_by_id(notifications)
            }
            NotificationAction::Clear => next.notifications.clear(),
            NotificationAction::SetLoading(loading) => next.loading = loading,
            NotificationAction::SetError(error) => next.error = error,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unread(id: &str) -> Notification {
        Notification {
            id: id.into(),
            content: format!("note {id}"),
            time: "now".into(),
            read: false,
            user_id: "1".into(),
        }
    }

    #[test]
    fn test_seed_shape() {
        let state = NotificationState::default();
        assert_eq!(state.notifications.len(), 28);
        assert_eq!(state.notifications[0].content, "New message from John Doe");
        // two named entries plus the 12 odd samples
        assert_eq!(state.unread_count(), 14);
        assert_eq!(state.notifications[27].id, "28");
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let state = NotificationState::default();
        let once = state.reduce(NotificationAction::MarkRead("1".into()));
        let twice = once.reduce(NotificationAction::MarkRead("1".into()));

        assert_eq!(once.unread_count(), state.unread_count() - 1);
        assert_eq!(twice.unread_count(), once.unread_count());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let state = NotificationState::default();
        assert_eq!(state.reduce(NotificationAction::MarkRead("nope".into())), state);
    }

    #[test]
    fn test_mark_all_read_zeroes_unread() {
        for state in [
            NotificationState::default(),
            NotificationState::default().reduce(NotificationAction::Clear),
            NotificationState::default().reduce(NotificationAction::MarkAllRead),
        ] {
            assert_eq!(state.reduce(NotificationAction::MarkAllRead).unread_count(), 0);
        }
    }

    #[test]
    fn test_add_prepends_and_counts() {
        let state = NotificationState::default().reduce(NotificationAction::Clear);
        let state = state
            .reduce(NotificationAction::Add(unread("a")))
            .reduce(NotificationAction::Add(unread("b")))
            .reduce(NotificationAction::Add(unread("a")));

        let ids: Vec<_> = state.notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(state.unread_count(), 2);

        let state = state.reduce(NotificationAction::Remove("b".into()));
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn test_bulk_replace_recounts() {
        let mut read = unread("r");
        read.read = true;
        let state = NotificationState::default()
            .reduce(NotificationAction::SetNotifications(vec![unread("x"), read, unread("x")]));
        assert_eq!(state.notifications.len(), 2);
        assert_eq!(state.unread_count(), 1);
    }
}
