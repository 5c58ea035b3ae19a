use std::{sync::Arc, time::Duration};

use crate::{
    api::{client::ApiClient, error},
    modules::{
        auth::service::AuthService,
        chat::service::ChatService,
        file_upload::{BlobRepositoryMemory, FileUploadService, UploadConfig},
        friend::service::FriendService,
        notification::service::NotificationService,
        user::{
            repository::UserDirectory, repository_http::UserDirectoryHttp, service::UserService,
        },
    },
    store::Store,
    ENV,
};

pub fn connect_users_api() -> Result<ApiClient, error::SystemError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(ENV.request_timeout_secs))
        .build()?;
    let client = ApiClient::new(ENV.users_api_url.as_str(), http);
    log::info!("Users API at {}", client.base_url());
    Ok(client)
}

/// Every service shares the one store; cloning is cheap.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<Store>,
    pub auth: AuthService,
    pub user: UserService,
    pub chat: ChatService,
    pub notification: NotificationService,
    pub friend: FriendService,
    pub file_upload: FileUploadService,
}

impl AppServices {
    pub fn new(directory: Arc<dyn UserDirectory + Send + Sync>, upload: UploadConfig) -> Self {
        let store = Arc::new(Store::default());
        let file_upload = FileUploadService::new(Arc::new(BlobRepositoryMemory::new()), upload);

        AppServices {
            auth: AuthService::with_dependencies(store.clone()),
            user: UserService::with_dependencies(directory, store.clone()),
            chat: ChatService::with_dependencies(store.clone(), file_upload.clone()),
            notification: NotificationService::with_dependencies(store.clone()),
            friend: FriendService::with_dependencies(store.clone()),
            file_upload,
            store,
        }
    }

    pub fn connect() -> Result<Self, error::SystemError> {
        let directory = UserDirectoryHttp::new(connect_users_api()?);
        Ok(Self::new(
            Arc::new(directory),
            UploadConfig::with_max_file_size(ENV.max_upload_size),
        ))
    }
}
