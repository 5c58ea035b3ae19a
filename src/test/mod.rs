//! Shared fixtures for handler and client tests.

use actix_web::{cookie::Cookie, test::TestRequest, web, App, HttpServer};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};

use crate::{
    api::error,
    configs::AppServices,
    constants::SESSION_COOKIE,
    modules::{
        file_upload::UploadConfig,
        user::{model::RegisterUser, repository::UserDirectory, schema::DirectoryUser},
    },
    ENV,
};

/// Serves `routes` on an ephemeral local port and returns its base URL.
pub fn spawn_upstream(routes: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(routes))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind upstream");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

/// In-process stand-in for the remote users API.
#[derive(Default)]
pub struct StubDirectory {
    users: Vec<DirectoryUser>,
    failure: Option<u16>,
    register_calls: AtomicUsize,
    last_registered: Mutex<Option<RegisterUser>>,
}

impl StubDirectory {
    pub fn with_users(count: u64) -> Self {
        let users = (1..=count)
            .map(|id| DirectoryUser {
                id,
                name: format!("User {id}"),
                username: format!("user{id}"),
                email: format!("user{id}@example.com"),
                phone: None,
                website: None,
            })
            .collect();
        StubDirectory { users, ..Default::default() }
    }

    /// Every call answers with this HTTP status.
    pub fn failing(status: u16) -> Self {
        StubDirectory { failure: Some(status), ..Default::default() }
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn last_registered(&self) -> Option<RegisterUser> {
        self.last_registered.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait::async_trait]
impl UserDirectory for StubDirectory {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, error::SystemError> {
        match self.failure {
            Some(status) => Err(error::SystemError::HttpStatus(status)),
            None => Ok(self.users.clone()),
        }
    }

    async fn register_user(&self, user: &RegisterUser) -> Result<(), error::SystemError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.failure {
            return Err(error::SystemError::HttpStatus(status));
        }
        *self.last_registered.lock().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        Ok(())
    }
}

pub fn test_services(directory: StubDirectory) -> AppServices {
    AppServices::new(Arc::new(directory), UploadConfig::with_max_file_size(1024 * 1024))
}

/// Attaches the session cookie a signed-in browser would send.
pub fn logged_in(req: TestRequest) -> TestRequest {
    req.cookie(Cookie::new(SESSION_COOKIE, ENV.session_token.as_str()))
}

/// `multipart/form-data` body with one file part per entry: `(file name, content type, content)`.
pub fn multipart_body(files: &[(&str, &str, &str)]) -> (String, Vec<u8>) {
    let boundary = "chitchat-test-boundary";
    let mut body = Vec::new();
    for (name, mime, content) in files {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// Builds the full application over a fresh store and returns `(service, store)`.
macro_rules! init_app {
    () => {
        $crate::test::init_app!($crate::test::StubDirectory::with_users(0))
    };
    ($directory:expr) => {{
        let services = $crate::test::test_services($directory);
        let store = services.store.clone();
        let app = actix_web::test::init_service(
            actix_web::App::new().configure(|cfg| $crate::configure_app(cfg, &services)),
        )
        .await;
        (app, store)
    }};
}

pub(crate) use init_app;
