use log::info;
use std::sync::Arc;
use validator::Validate;

use crate::{
    api::error,
    constants::INVALID_CREDENTIALS,
    modules::auth::{
        model::{LoginModel, SessionUser},
        slice::AuthAction,
    },
    store::Store,
    ENV,
};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<Store>,
}

impl AuthService {
    pub fn with_dependencies(store: Arc<Store>) -> Self {
        info!("AuthService initialized with dependencies");
        AuthService { store }
    }

    /// Mock sign-in: any well-formed email with a non-empty password is accepted.
    pub fn login(&self, credentials: LoginModel) -> Result<SessionUser, error::SystemError> {
        self.store.dispatch(AuthAction::LoginStart);

        if credentials.validate().is_err() {
            self.store.dispatch(AuthAction::LoginFailure(INVALID_CREDENTIALS.to_string()));
            return Err(error::SystemError::unauthorized(INVALID_CREDENTIALS));
        }

        let user = SessionUser::from_email(&credentials.email);
        self.store.dispatch(AuthAction::LoginSuccess(user.clone()));
        info!("User {} signed in", user.username);
        Ok(user)
    }

    pub fn logout(&self) {
        self.store.dispatch(AuthAction::Logout);
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.store.state().auth.user.clone()
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        !token.is_empty() && token == ENV.session_token
    }

    /// A valid token with an empty auth slice means the process restarted while the
    /// browser kept its token; put the session user back.
    pub fn restore_session(&self) -> SessionUser {
        if let Some(user) = self.current_user() {
            return user;
        }
        let user = SessionUser::restored();
        self.store.dispatch(AuthAction::LoginSuccess(user.clone()));
        info!("Session restored from stored token");
        user
    }
}
