use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::{
    model::RegisterModel,
    repository::UserDirectory,
    slice::{UsersAction, UsersState},
};
use crate::store::Store;

#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory + Send + Sync>,
    store: Arc<Store>,
}

impl UserService {
    pub fn with_dependencies(
        directory: Arc<dyn UserDirectory + Send + Sync>,
        store: Arc<Store>,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService { directory, store }
    }

    pub fn snapshot(&self) -> UsersState {
        self.store.state().users.clone()
    }

    /// The result lands in the users slice whatever happened in between; there is
    /// no cancellation and no staleness check.
    pub async fn fetch_users(&self) {
        self.store.dispatch(UsersAction::FetchPending);
        match self.directory.fetch_users().await {
            Ok(users) => {
                info!("Fetched {} users from directory", users.len());
                self.store.dispatch(UsersAction::FetchFulfilled(users));
            }
            Err(e) => {
                self.store.dispatch(UsersAction::FetchRejected(e.to_string()));
            }
        }
    }

    /// Single attempt. On failure the message is kept in `registerError` and returned.
    pub async fn register_user(&self, form: RegisterModel) -> Result<(), error::SystemError> {
        self.store.dispatch(UsersAction::RegisterPending);
        match self.directory.register_user(&form.into()).await {
            Ok(()) => {
                self.store.dispatch(UsersAction::RegisterFulfilled);
                Ok(())
            }
            Err(e) => {
                self.store.dispatch(UsersAction::RegisterRejected(e.to_string()));
                Err(e)
            }
        }
    }
}
