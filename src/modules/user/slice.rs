use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{modules::user::schema::DirectoryUser, store::Slice};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersState {
    pub data: Vec<DirectoryUser>,
    pub loading: bool,
    pub error: Option<String>,
    pub register_loading: bool,
    pub register_error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum UsersAction {
    FetchPending,
    FetchFulfilled(Vec<DirectoryUser>),
    FetchRejected(String),
    RegisterPending,
    RegisterFulfilled,
    RegisterRejected(String),
}

impl UsersAction {
    pub fn kind(&self) -> &'static str {
        match self {
            UsersAction::FetchPending => "users/fetch/pending",
            UsersAction::FetchFulfilled(_) => "users/fetch/fulfilled",
            UsersAction::FetchRejected(_) => "users/fetch/rejected",
            UsersAction::RegisterPending => "users/register/pending",
            UsersAction::RegisterFulfilled => "users/register/fulfilled",
            UsersAction::RegisterRejected(_) => "users/register/rejected",
        }
    }
}

impl Slice for UsersState {
    type Action = UsersAction;

    fn reduce(&self, action: UsersAction) -> Self {
        let mut next = self.clone();
        match action {
            UsersAction::FetchPending => {
                next.loading = true;
                next.error = None;
            }
            UsersAction::FetchFulfilled(users) => {
                let mut seen = HashSet::new();
                next.loading = false;
                next.data = users.into_iter().filter(|u| seen.insert(u.id)).collect();
            }
            UsersAction::FetchRejected(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            UsersAction::RegisterPending => {
                next.register_loading = true;
                next.register_error = None;
            }
            UsersAction::RegisterFulfilled => {
                next.register_loading = false;
            }
            UsersAction::RegisterRejected(message) => {
                next.register_loading = false;
                next.register_error = Some(message);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> DirectoryUser {
        DirectoryUser {
            id,
            name: format!("User {id}"),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            phone: None,
            website: None,
        }
    }

    #[test]
    fn test_fetch_cycle() {
        let state = UsersState::default().reduce(UsersAction::FetchPending);
        assert!(state.loading);

        let state = state.reduce(UsersAction::FetchFulfilled(vec![user(1), user(2), user(1)]));
        assert!(!state.loading);
        assert_eq!(state.data.len(), 2);
    }

    #[test]
    fn test_pending_clears_previous_error_but_keeps_data() {
        let state = UsersState::default()
            .reduce(UsersAction::FetchFulfilled(vec![user(1)]))
            .reduce(UsersAction::FetchRejected("HTTP error! status: 500".into()))
            .reduce(UsersAction::FetchPending);
        assert!(state.error.is_none());
        assert_eq!(state.data, vec![user(1)]);
    }

    #[test]
    fn test_late_result_overwrites_whatever_is_there() {
        let state = UsersState::default()
            .reduce(UsersAction::FetchFulfilled(vec![user(1), user(2)]))
            .reduce(UsersAction::FetchFulfilled(vec![user(3)]));
        assert_eq!(state.data, vec![user(3)]);
    }

    #[test]
    fn test_register_rejection() {
        let state = UsersState::default()
            .reduce(UsersAction::RegisterPending)
            .reduce(UsersAction::RegisterRejected("HTTP error! status: 409".into()));
        assert!(!state.register_loading);
        assert_eq!(state.register_error.as_deref(), Some("HTTP error! status: 409"));
        assert!(!state.loading);
    }
}
