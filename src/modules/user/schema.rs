use serde::{Deserialize, Serialize};

/// Entry returned by the external user directory. Payloads missing any of the
/// required fields are rejected when decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}
