use crate::{
    api::error,
    modules::user::{model::RegisterUser, schema::DirectoryUser},
};

#[async_trait::async_trait]
pub trait UserDirectory {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, error::SystemError>;

    async fn register_user(&self, user: &RegisterUser) -> Result<(), error::SystemError>;
}
