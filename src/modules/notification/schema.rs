use serde::{Deserialize, Serialize};

use crate::store::list::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub content: String,
    /// Display label such as "2 minutes ago"; never parsed.
    pub time: String,
    pub read: bool,
    /// Roster user the notification is about.
    pub user_id: String,
}

impl Identified for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}
