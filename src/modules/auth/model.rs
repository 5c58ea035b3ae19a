use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl SessionUser {
    /// The mock login keeps whatever precedes the `@` as the display name.
    pub fn from_email(email: &str) -> Self {
        let username = email.split('@').next().unwrap_or(email).to_string();
        SessionUser { id: "1".to_string(), username, email: email.to_string() }
    }

    /// User put back in place when a stored session token is presented after a restart.
    pub fn restored() -> Self {
        SessionUser {
            id: "1".to_string(),
            username: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}
