use serde::{Deserialize, Serialize};

use crate::{modules::auth::model::SessionUser, store::Slice};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(SessionUser),
    LoginFailure(String),
    Logout,
}

impl AuthAction {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthAction::LoginStart => "auth/loginStart",
            AuthAction::LoginSuccess(_) => "auth/loginSuccess",
            AuthAction::LoginFailure(_) => "auth/loginFailure",
            AuthAction::Logout => "auth/logout",
        }
    }
}

impl Slice for AuthState {
    type Action = AuthAction;

    fn reduce(&self, action: AuthAction) -> Self {
        let mut next = self.clone();
        match action {
            AuthAction::LoginStart => {
                next.loading = true;
                next.error = None;
            }
            AuthAction::LoginSuccess(user) => {
                next.user = Some(user);
                next.loading = false;
                next.error = None;
            }
            AuthAction::LoginFailure(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            AuthAction::Logout => {
                next.user = None;
                next.loading = false;
                next.error = None;
            }
        }
        next
    }
}
