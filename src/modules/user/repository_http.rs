use serde::de::IgnoredAny;

use crate::{
    api::{client::ApiClient, error},
    modules::user::{model::RegisterUser, repository::UserDirectory, schema::DirectoryUser},
};

#[derive(Clone)]
pub struct UserDirectoryHttp {
    client: ApiClient,
}

impl UserDirectoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl UserDirectory for UserDirectoryHttp {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, error::SystemError> {
        self.client.get_without_auth("/users").await
    }

    async fn register_user(&self, user: &RegisterUser) -> Result<(), error::SystemError> {
        self.client.post_without_auth::<IgnoredAny, _>("/register", user).await?;
        Ok(())
    }
}
