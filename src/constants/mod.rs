/// Cookie holding the session token the browser keeps across reloads.
pub const SESSION_COOKIE: &str = "token";
/// Cookie whose value is forwarded to the users API as a bearer token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

pub const NOTIFICATIONS_PER_PAGE: usize = 10;
/// Distance from the bottom of the notification list, in pixels, that counts as "reached the end".
pub const SCROLL_THRESHOLD_PX: u32 = 10;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const DEFAULT_SENDER: &str = "Anonymous";

/// Document extensions the file picker accepts next to any `image/*` type.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "txt", "zip", "rar"];

pub struct Env {
    pub frontend_url: String,
    pub users_api_url: String,
    pub session_token: String,
    pub max_upload_size: usize,
    pub request_timeout_secs: u64,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let users_api_url = std::env::var("USERS_API_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());
        let session_token =
            std::env::var("SESSION_TOKEN").unwrap_or_else(|_| "mock-token".to_string());

        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_SIZE must be a valid usize integer");
        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64 integer");

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env {
            frontend_url,
            users_api_url,
            session_token,
            max_upload_size,
            request_timeout_secs,
            ip,
            port,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
